use serde_json::Value;

/// Print just the key answer: the recommended strategy for comparisons,
/// or the headline figure for the stand-alone calculators.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(rec) = result.get("recommendation") {
        let strategy = rec.get("strategy").and_then(Value::as_str).unwrap_or("?");
        match rec.get("savings").and_then(Value::as_str) {
            Some(savings) => println!("{} (saves {})", strategy, savings),
            None => println!("{}", strategy),
        }
        return;
    }

    // Headline fields for the calculator commands
    let priority_keys = ["monthly_installment", "maturity_value", "net_cost"];

    if let Value::Object(map) = result {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
