//! Portfolio aggregation and risk report example.

use fincalc::portfolio::aggregation::portfolio_value;
use fincalc::portfolio::position::Position;
use fincalc::risk::assessment::risk_assessment;

fn main() {
    println!("╔══════════════════════════════════════╗");
    println!("║  fincalc: Portfolio & Risk Report    ║");
    println!("╚══════════════════════════════════════╝\n");

    // --- A three-asset portfolio ---
    println!("━━━ Portfolio Aggregation ━━━\n");

    let positions = vec![
        Position::new(50_000.0, 7.5),  // equities
        Position::new(30_000.0, 3.2),  // bonds
        Position::new(20_000.0, -1.0), // commodities, down this year
    ];

    for (i, p) in positions.iter().enumerate() {
        println!("  Position {}: ${:>10.2} at {:>6.2}%", i + 1, p.amount, p.return_rate);
    }
    println!();

    let summary = portfolio_value(&positions).unwrap();
    println!("{}\n", summary);

    // --- Risk over the trailing periods ---
    println!("━━━ Risk Assessment ━━━\n");

    let history = [4.2, 6.1, -1.3, 8.0, 5.5, 3.9, -2.4, 7.1];
    println!("Trailing returns: {:?}\n", history);

    let risk = risk_assessment(&history).unwrap();
    println!("{}", risk);
}
