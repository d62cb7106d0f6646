// demos/demo.rs
use option_pricer::{
    output, BinomialTreeModel, BlackScholesModel, MonteCarloPricing, OptionKind,
    PricingParameters,
};

fn main() {
    println!("Running option-pricer demo\n");

    let spot = 100.0;
    let strike = 100.0;
    let days = 365;
    let rate = 0.05;
    let sigma = 0.2;

    let params = match PricingParameters::new(spot, strike, days, rate, sigma) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Parameter error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Inputs: S={} K={} T={}d r={} sigma={}\n",
        spot, strike, days, rate, sigma
    );

    // Black-Scholes
    let bs = BlackScholesModel::new(params);
    println!("Black-Scholes");
    println!("  call: {:.4}", bs.calculate_option_price(OptionKind::Call));
    println!("  put:  {:.4}", bs.calculate_option_price(OptionKind::Put));

    // Monte Carlo, 50k paths with a fixed seed
    let mut mc = MonteCarloPricing::with_seed(params, 50_000, 42).expect("valid configuration");
    mc.simulate_prices();
    println!("\nMonte Carlo (50,000 paths, daily steps)");
    println!(
        "  call: {:.4}",
        mc.calculate_option_price(OptionKind::Call)
            .expect("simulated")
    );
    println!(
        "  put:  {:.4}",
        mc.calculate_option_price(OptionKind::Put).expect("simulated")
    );

    // Binomial lattice, 10k steps
    let tree = BinomialTreeModel::new(params, 10_000).expect("valid configuration");
    println!("\nBinomial tree (10,000 steps)");
    println!(
        "  call: {:.4}",
        tree.calculate_option_price(OptionKind::Call)
    );
    println!("  put:  {:.4}", tree.calculate_option_price(OptionKind::Put));

    // Export a plot-ready subset of paths for external visualization
    let run = mc.simulation_run().expect("simulated");
    match output::write_paths_to_csv("simulated_paths.csv", run, 100) {
        Ok(()) => println!("\nWrote first 100 paths to simulated_paths.csv"),
        Err(e) => eprintln!("\nCould not write paths: {}", e),
    }

    let summary = [
        ("spot_price", format!("{}", spot)),
        ("strike_price", format!("{}", strike)),
        ("time_to_maturity_days", format!("{}", days)),
        ("risk_free_rate", format!("{}", rate)),
        ("volatility", format!("{}", sigma)),
        (
            "bs_call",
            format!("{:.6}", bs.calculate_option_price(OptionKind::Call)),
        ),
        (
            "bs_put",
            format!("{:.6}", bs.calculate_option_price(OptionKind::Put)),
        ),
    ];
    match output::write_summary_to_csv("pricing_summary.csv", &summary) {
        Ok(()) => println!("Wrote pricing summary to pricing_summary.csv"),
        Err(e) => eprintln!("Could not write summary: {}", e),
    }
}
