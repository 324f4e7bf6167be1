// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator_engine::prelude::*;
use calculator_engine::utils::init_logging;
use std::sync::Arc;
use tracing::Level;

fn show(label: &str, calc: &Calculator) {
    let view = calc.view();
    let marker = if view.is_error { " (error)" } else { "" };
    println!("{:<28} {:>30}{} [{:?}]", label, view.text, marker, view.size);
}

fn main() {
    if let Err(e) = init_logging(Level::DEBUG) {
        eprintln!("{}", e);
    }

    println!("=== Calculator Engine Example ===\n");

    let mut calc = CalculatorBuilder::new()
        .config(CalculatorConfig::desktop())
        .event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("desktop configuration is valid");

    // Chained evaluation, left to right
    for key in ["2", "+", "3", "+"] {
        calc.handle_key(key);
    }
    show("2 + 3 +", &calc);
    for key in ["4", "Enter"] {
        calc.handle_key(key);
    }
    show("2 + 3 + 4 =", &calc);

    // Decimal exactness
    calc.clear();
    for key in [".", "1", "+", ".", "2", "="] {
        calc.handle_key(key);
    }
    show("0.1 + 0.2 =", &calc);

    // Fractional power
    calc.clear();
    for key in ["2", "^", ".", "5", "="] {
        calc.handle_key(key);
    }
    show("2 ^ 0.5 =", &calc);

    // Division by zero and recovery
    calc.clear();
    for key in ["1", "/", "0", "="] {
        calc.handle_key(key);
    }
    show("1 / 0 =", &calc);
    calc.handle_key("5");
    show("5", &calc);

    // Sign toggle
    calc.toggle_sign();
    show("+/-", &calc);

    println!("\nActions applied: {}", calc.actions_applied());
}
