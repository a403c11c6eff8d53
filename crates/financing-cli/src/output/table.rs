use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Figure fields shown in the scenario table, in display order.
const FIGURE_FIELDS: [&str; 10] = [
    "own_capital_used_directly",
    "loan_amount",
    "monthly_installment",
    "total_interest_gross",
    "total_interest_net",
    "capital_invested",
    "investment_maturity_value",
    "investment_gain_gross",
    "investment_gain_after_tax",
    "net_cost",
];

/// Render output as tables. Comparison results get a scenario table, the
/// recommendation line and the year-wise series; anything else falls back
/// to a field/value listing.
pub fn print_table(value: &Value) {
    if let Some(result) = value.get("result") {
        if result.get("scenarios").is_some() {
            print_comparison(result);
        } else {
            print_flat_object(result);
        }
        print_warnings(value);
        return;
    }

    match value {
        Value::Array(arr) => print_array_table(arr),
        _ => print_flat_object(value),
    }
}

fn print_comparison(result: &Value) {
    let scenarios = match result.get("scenarios").and_then(Value::as_array) {
        Some(arr) if !arr.is_empty() => arr,
        _ => return,
    };

    let mut builder = Builder::default();
    let mut header = vec!["Field".to_string()];
    for scenario in scenarios {
        header.push(
            scenario
                .get("strategy")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string(),
        );
    }
    builder.push_record(header);

    for field in FIGURE_FIELDS {
        let mut row = vec![field.to_string()];
        for scenario in scenarios {
            let cell = if scenario.get("status").and_then(Value::as_str) == Some("computed") {
                scenario
                    .get("figures")
                    .and_then(|f| f.get(field))
                    .map(format_value)
                    .unwrap_or_default()
            } else {
                "overflow".to_string()
            };
            row.push(cell);
        }
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));

    if let Some(rec) = result.get("recommendation") {
        let strategy = rec.get("strategy").and_then(Value::as_str).unwrap_or("?");
        let savings = rec.get("savings").and_then(Value::as_str).unwrap_or("0");
        println!(
            "\nRecommended: {} (saves {} vs the costliest alternative)",
            strategy, savings
        );
    }

    if let Some(rows) = result.get("yearly").and_then(Value::as_array) {
        print_yearly(rows);
    }
}

fn print_yearly(rows: &[Value]) {
    let Some(first) = rows.first() else {
        return;
    };
    let strategies: Vec<String> = first
        .get("scenarios")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|e| {
                    e.get("strategy")
                        .and_then(Value::as_str)
                        .unwrap_or("?")
                        .to_string()
                })
                .collect()
        })
        .unwrap_or_default();
    if strategies.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    let mut header = vec!["Year".to_string()];
    for strategy in &strategies {
        header.push(format!("{} net cost", strategy));
    }
    builder.push_record(header);

    for row in rows {
        let mut record = vec![row
            .get("year")
            .map(format_value)
            .unwrap_or_default()];
        let entries = row
            .get("scenarios")
            .and_then(Value::as_array)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        for entry in entries {
            record.push(
                entry
                    .get("net_cost")
                    .map(format_value)
                    .unwrap_or_default(),
            );
        }
        builder.push_record(record);
    }

    println!("\nYear-wise net cost:");
    println!("{}", Table::from(builder));
}

fn print_warnings(envelope: &Value) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
