//! Loan and savings walkthrough.
//!
//! Demonstrates the closed-form calculations: compound interest,
//! amortized payments, annuity streams, and annualized return.

use fincalc::interest::annuity::future_value_annuity;
use fincalc::interest::compounding::compound_interest;
use fincalc::lending::amortization::monthly_payment;
use fincalc::performance::returns::investment_return;

fn main() {
    println!("╔══════════════════════════════════════╗");
    println!("║  fincalc: Loan & Savings Walkthrough ║");
    println!("╚══════════════════════════════════════╝\n");

    // --- Scenario 1: Savings growth ---
    println!("━━━ Scenario 1: Compound Savings ━━━\n");

    let amount = compound_interest(10_000.0, 0.05, 10.0, 4).unwrap();
    println!("$10,000 at 5%, compounded quarterly, 10 years:");
    println!("  Final amount:   ${:.2}", amount);
    println!("  Interest earned: ${:.2}", amount - 10_000.0);
    println!();

    // --- Scenario 2: Mortgage ---
    println!("━━━ Scenario 2: 30-Year Mortgage ━━━\n");

    let payment = monthly_payment(200_000.0, 0.04, 30.0).unwrap();
    let total = payment * 12.0 * 30.0;
    println!("$200,000 at 4% over 30 years:");
    println!("  Monthly payment: ${:.2}", payment);
    println!("  Total repaid:    ${:.2}", total);
    println!("  Total interest:  ${:.2}", total - 200_000.0);
    println!();

    // --- Scenario 3: Annual contributions ---
    println!("━━━ Scenario 3: Annuity Stream ━━━\n");

    for rate in [0.0, 0.03, 0.06] {
        let fv = future_value_annuity(6_000.0, rate, 10.0).unwrap();
        println!("  $6,000/year for 10 years at {:>4.1}%: ${:>10.2}", rate * 100.0, fv);
    }
    println!();

    // --- Scenario 4: What did the decade earn? ---
    println!("━━━ Scenario 4: Annualized Return ━━━\n");

    let annual = investment_return(10_000.0, 20_000.0, 10.0).unwrap();
    println!("Doubling $10,000 over 10 years: {:.2}% per year", annual);
}
