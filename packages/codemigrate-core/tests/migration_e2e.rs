// End-to-end migration scenarios over the full pipeline:
// extraction → mapping → generation → validation.

use pretty_assertions::assert_eq;

use codemigrate_core::{migrate_source, MigrateError, MigrationConfig, OverallStatus};

/// Hermetic configuration: no linter shell-out, no execution subprocess.
fn config() -> MigrationConfig {
    MigrationConfig {
        run_static_analysis: false,
        run_execution_check: false,
        ..MigrationConfig::default()
    }
}

#[test]
fn person_scenario() {
    let java = r#"
public class Person {
    String name;
    int age;

    public Person(String name, int age) {
        this.name = name;
        this.age = age;
    }

    public String getName() {
        return name;
    }
}
"#;
    let outcome = migrate_source(java, &config()).unwrap();

    // Both instance fields are assigned from the constructor parameters.
    assert!(outcome.code.contains("def __init__(self, name: str, age: int):"));
    assert!(outcome.code.contains("self.name: str = name"));
    assert!(outcome.code.contains("self.age: int = age"));

    // Renamed accessor with the mapped return annotation.
    assert!(outcome.code.contains("def get_name(self) -> str:"));
    assert!(outcome.code.contains("return name"));

    assert!(outcome.report.checks["syntax"].passed);
    assert_eq!(outcome.report.overall_status, OverallStatus::Success);
}

#[test]
fn static_method_with_empty_body() {
    let java = "public class Counter { public static int count() { } }";
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("@staticmethod"));
    assert!(outcome.code.contains("def count() -> int:"));
    assert!(outcome.code.contains("\"\"\"untranslated\"\"\""));

    assert!(outcome.report.checks["naming"].passed);
    assert!(outcome.report.checks["type_annotations"].passed);
    assert!(outcome.report.checks["syntax"].passed);
}

// Regression: overloads after the first constructor are dropped, by design.
#[test]
fn only_first_constructor_survives() {
    let java = r#"
public class Box {
    private int size;

    public Box(int size) {
        this.size = size;
    }

    public Box() {
    }
}
"#;
    let outcome = migrate_source(java, &config()).unwrap();

    assert_eq!(outcome.code.matches("def __init__").count(), 1);
    assert!(outcome.code.contains("def __init__(self, size: int):"));
    assert!(outcome.code.contains("self._size: int = size"));
    assert_eq!(outcome.structure.classes[0].constructors.len(), 2);
}

#[test]
fn constant_field_renamed_and_hoisted() {
    let java = "public class Limits { public static final int maxSize = 100; }";
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("MAX_SIZE: int = 100"));
    assert!(!outcome.code.contains("maxSize"));
    assert!(outcome.report.checks["syntax"].passed);
}

#[test]
fn empty_class_gets_placeholder_body() {
    let java = "public class Empty { }";
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("class Empty:"));
    assert!(outcome.code.contains("    pass"));
    assert!(outcome.report.checks["syntax"].passed);
    // The structure check flags the member-less class.
    assert_eq!(outcome.report.overall_status, OverallStatus::Warning);
    assert!(!outcome.report.checks["structure"].passed);
}

#[test]
fn static_context_qualifies_constants_by_class() {
    let java = r#"
public class Calculator {
    public static final double PI = 3.14159;

    public static double circleArea(double radius) {
        return PI * radius * radius;
    }

    public double tau() {
        return PI + PI;
    }
}
"#;
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("PI: float = 3.14159"));
    assert!(outcome.code.contains("return Calculator.PI * radius * radius"));
    assert!(outcome.code.contains("return self.PI + self.PI"));
    assert!(outcome.report.checks["syntax"].passed);
}

#[test]
fn untranslatable_statements_degrade_to_markers() {
    let java = r#"
public class Calculator {
    public double divide(double a, double b) {
        if (b == 0) {
            throw new IllegalArgumentException("Division by zero");
        }
        return a / b;
    }
}
"#;
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("# <unrecognized: if_statement>"));
    assert!(outcome.code.contains("return a / b"));
    assert!(outcome.report.checks["syntax"].passed);
}

#[test]
fn receiver_of_qualified_call_is_dropped() {
    let java = r#"
public class Facade {
    public void run() {
        helper.compute(x);
    }
}
"#;
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("compute(x)"));
    assert!(!outcome.code.contains("helper.compute"));
    assert!(outcome.report.checks["syntax"].passed);
}

#[test]
fn imports_are_mapped_and_sorted() {
    let java = r#"
import java.util.List;
import java.util.HashMap;
import java.util.Map;

public class Registry {
    private Map<String, Integer> entries;
}
"#;
    let outcome = migrate_source(java, &config()).unwrap();

    assert!(outcome.code.contains("from typing import Dict, List, Any, Optional"));
    assert!(outcome.code.contains("from typing import Dict\n"));
    assert!(outcome.code.contains("from typing import List\n"));
    assert!(outcome.code.contains("self._entries: Dict[str, int] = entries"));
    assert!(outcome.report.checks["syntax"].passed);
}

// Round-trip invariant: whatever the mapper produces, the generator's output
// passes the syntax check.
#[test]
fn generated_text_always_parses() {
    let fixtures = [
        "class A { }",
        "public abstract class Shape { public abstract double area(); }",
        "class B { private int x = 1, y = 2; int get() { return x + y; } }",
        "class C extends Base implements I1, I2 { void noop() { } }",
        "class D { void chain() { a.b(c.d(e)); } }",
        "class E { String weird() { return unmapped; } }",
    ];
    for java in fixtures {
        let outcome = migrate_source(java, &config()).unwrap();
        assert!(
            outcome.report.checks["syntax"].passed,
            "syntax check failed for fixture: {}\n---\n{}",
            java, outcome.code
        );
        assert!(outcome.code.ends_with('\n'));
        assert!(!outcome.code.contains("\n\n\n"));
    }
}

#[test]
fn empty_input_halts_before_mapping() {
    assert!(matches!(
        migrate_source("", &config()),
        Err(MigrateError::Parse { .. })
    ));
    assert!(matches!(
        migrate_source("package only.a.package;", &config()),
        Err(MigrateError::EmptyStructure)
    ));
}

#[test]
fn report_serializes_to_json() {
    let outcome = migrate_source("class A { int x; }", &config()).unwrap();
    let json = serde_json::to_string(&outcome.report).unwrap();
    assert!(json.contains("\"overall_status\""));
    assert!(json.contains("\"syntax\""));
}
