use outfit_merge::{merge_classes, merge_tokens};

const CARD_BASE: &str =
    "rounded-lg border bg-card text-card-foreground shadow-sm transition-shadow hover:shadow-md";

const ALERT_BASE: &str = "relative w-full rounded-lg border p-4 [&>svg~*]:pl-7 \
     [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 \
     [&>svg]:text-foreground";

#[test]
fn test_card_override_replaces_shadow_and_radius() {
    let merged = merge_classes(&[CARD_BASE, "flex flex-col", "rounded-none shadow-lg"]);
    assert_eq!(
        merged,
        "border bg-card text-card-foreground transition-shadow hover:shadow-md flex flex-col \
         rounded-none shadow-lg"
    );
}

#[test]
fn test_alert_destructive_keeps_scoped_svg_colour() {
    let destructive =
        "border-destructive/50 text-destructive dark:border-destructive [&>svg]:text-destructive";
    let merged = merge_tokens([ALERT_BASE, destructive]);

    assert!(merged.contains(&"[&>svg]:text-destructive".to_string()));
    assert!(!merged.contains(&"[&>svg]:text-foreground".to_string()));
    // Unscoped and dark-scoped colours are separate from the svg-scoped one.
    assert!(merged.contains(&"text-destructive".to_string()));
    assert!(merged.contains(&"dark:border-destructive".to_string()));
    // Border width and colour are different properties.
    assert!(merged.contains(&"border".to_string()));
    assert!(merged.contains(&"border-destructive/50".to_string()));
}

#[test]
fn test_caller_width_overrides_component_width() {
    let merged = merge_tokens([ALERT_BASE, "w-[400px]"]);
    assert!(!merged.contains(&"w-full".to_string()));
    assert_eq!(merged.last().map(String::as_str), Some("w-[400px]"));
}

#[test]
fn test_numbered_list_alignment_and_font() {
    let base = "list-inside list-decimal text-sm/6 text-center sm:text-left \
                font-[family-name:var(--font-geist-mono)]";
    let merged = merge_classes(&[base, "text-lg text-blue-600 list-disc"]);
    assert_eq!(
        merged,
        "list-inside text-center sm:text-left font-[family-name:var(--font-geist-mono)] \
         text-lg text-blue-600 list-disc"
    );
}

#[test]
fn test_quote_spacing_override() {
    let base = "border-l-4 border-gray-300 pl-4 text-gray-700 italic dark:border-gray-600";
    let merged = merge_classes(&[base, "border-l-2 pl-2 not-italic"]);
    assert_eq!(
        merged,
        "border-gray-300 text-gray-700 dark:border-gray-600 border-l-2 pl-2 not-italic"
    );
}

#[test]
fn test_merge_is_stable_across_calls() {
    let first = merge_tokens([CARD_BASE, "flex flex-col", "p-2"]);
    let second = merge_tokens([CARD_BASE, "flex flex-col", "p-2"]);
    assert_eq!(first, second);
}
