//! The process-wide registry can be installed once, before first use.
//!
//! Kept in its own test binary: installing mutates process state that the
//! other tests read.

use outfit::{install, AxisDefinition, OptionRecord, RegistryError, SchemaRegistry, VariantSchema};

#[test]
fn test_install_then_global() {
    let mut registry = SchemaRegistry::new();
    registry
        .register(
            "chip",
            VariantSchema::builder()
                .base("rounded-full px-2")
                .axis(
                    AxisDefinition::builder("tone")
                        .value("neutral", "bg-muted")
                        .value("accent", "bg-accent")
                        .default_value("neutral"),
                )
                .build()
                .unwrap(),
        )
        .unwrap();

    install(registry).unwrap();

    let global = outfit::global().unwrap();
    assert_eq!(global.kinds().collect::<Vec<_>>(), vec!["chip"]);
    assert!(!global.contains("button"));

    let composed = global
        .compose("chip", &OptionRecord::new().set("tone", "accent"), &[] as &[&str])
        .unwrap();
    assert_eq!(composed.tokens.to_string(), "rounded-full px-2 bg-accent");

    assert_eq!(
        install(SchemaRegistry::new()).unwrap_err(),
        RegistryError::AlreadyInstalled
    );
}
