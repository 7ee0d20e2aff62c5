use fifo_credit::{
    generate_report, parse_transaction_log, JsonReport, LedgerEntry, LogParser, ProfitEngine,
    SkipReason,
};

const BROKER_LOG: &str = "\
Order History (Equity)
Date Type Stock Order Price Qty Avg Price Status
02 Jan 2024 09:20 B Infosys Ltd Delivery ₹15,000.00 10/10 1,500.00 MKT Successful
02 Jan 2024 09:20 B Infosys Ltd Delivery ₹7,800.00 5/5 1,560.00 MKT Successful
03 Jan 2024 11:05 B HDFC Bank Delivery ₹16,500.00 10/10 1,650.00 1,650.00 Successful
05 Jan 2024 14:40 S Infosys Ltd Delivery ₹19,200.00 12/12 1,600.00 MKT Successful
05 Jan 2024 15:00 B Tata Steel Delivery ₹1,400.00 4/10 140.00 MKT Cancelled
08 Jan 2024 10:10 S HDFC Bank Delivery ₹16,000.00 10/10 1,600.00 MKT Successful
09 Jan 2024 10:00 S Wipro Delivery ₹4,500.00 10/10 450.00 MKT Successful
04 Jan 2024 12:00 B Wipro Delivery ₹2,000.00 5/5 400.00 MKT Successful
End of statement
";

#[test]
fn test_parse_broker_log() {
    let outcome = LogParser::new().parse_with_diagnostics(BROKER_LOG);

    assert_eq!(outcome.diagnostics.matched, 8);
    assert_eq!(outcome.diagnostics.retained, 7);
    assert_eq!(outcome.diagnostics.skipped_count(), 1);
    assert_eq!(outcome.diagnostics.skipped[0].company, "Tata Steel");
    assert!(matches!(
        outcome.diagnostics.skipped[0].reason,
        SkipReason::PartialFill { filled: 4, ordered: 10, .. }
    ));

    let dates: Vec<&str> = outcome.transactions.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "02 Jan 2024 09:20",
            "02 Jan 2024 09:20",
            "03 Jan 2024 11:05",
            "04 Jan 2024 12:00",
            "05 Jan 2024 14:40",
            "08 Jan 2024 10:10",
            "09 Jan 2024 10:00",
        ]
    );
    // Same-minute buys stay in log order
    assert_eq!(outcome.transactions[0].rate, 1500.0);
    assert_eq!(outcome.transactions[1].rate, 1560.0);
}

#[test]
fn test_bank_credit_for_broker_log() {
    let transactions = parse_transaction_log(BROKER_LOG);
    let report = ProfitEngine::new().compute(&transactions);

    let names: Vec<&str> = report.companies.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(names, vec!["Infosys Ltd", "HDFC Bank", "Wipro"]);

    // 12 sold: 10 @ 1500 + 2 @ 1560
    let infosys = report.company("Infosys Ltd").unwrap();
    let sale = infosys.sells().next().unwrap();
    assert!((sale.cost_basis - 18120.0).abs() < 1e-9);
    assert!((sale.gross_profit - 1080.0).abs() < 1e-9);
    assert!((sale.charges.total - 53.672256).abs() < 1e-9);
    assert!((sale.credited - 1026.327744).abs() < 1e-9);
    assert_eq!(infosys.open_quantity(), 3);

    let hdfc = report.company("HDFC Bank").unwrap();
    let sale = hdfc.sells().next().unwrap();
    assert!(sale.net_profit < 0.0);
    assert_eq!(sale.credited, 0.0);

    let wipro = report.company("Wipro").unwrap();
    assert!(matches!(
        wipro.entries[1],
        LedgerEntry::Rejected { qty: 10, available: 5, .. }
    ));
    assert_eq!(wipro.open_quantity(), 5);

    assert!((report.total_credited - 1026.327744).abs() < 1e-9);
}

#[test]
fn test_rendered_report_for_broker_log() {
    let text = generate_report(BROKER_LOG);

    assert!(text.starts_with("=== BANK CREDIT REPORT (PROFIT ONLY) ===\n"));
    assert!(text.contains("\n--- Infosys Ltd ---\n"));
    assert!(text.contains("Sell 12 @ ₹1600.00 on 05 Jan 2024 14:40\n"));
    assert!(text.contains("  Cost: ₹18120.00\n"));
    assert!(text.contains("  Net Profit: ₹-550.33\n"));
    assert!(text.contains("⚠️ Skipped sell of 10 shares on 09 Jan 2024 10:00, insufficient inventory.\n"));
    assert!(!text.contains("Tata Steel"));
    assert!(text.ends_with("Total Credited to Bank (only profit): ₹1026.33\n"));
}

#[test]
fn test_pipeline_matches_generate_report() {
    let transactions = LogParser::new().parse(BROKER_LOG);
    let engine = ProfitEngine::new();

    assert_eq!(engine.compute_report(&transactions), generate_report(BROKER_LOG));
    assert_eq!(engine.compute_report(&transactions), engine.compute_report(&transactions));
}

#[test]
fn test_log_without_records() {
    let text = generate_report("No orders were placed this month.\n");

    assert_eq!(
        text,
        "=== BANK CREDIT REPORT (PROFIT ONLY) ===\n\n=== TOTAL ===\nTotal Credited to Bank (only profit): ₹0.00\n"
    );
}

#[test]
fn test_concurrent_runs_share_nothing() {
    let parser = LogParser::new();
    let engine = ProfitEngine::new();
    let expected = generate_report(BROKER_LOG);
    let other_log = "01 Feb 2024 10:00 B ITC Delivery ₹4,500.00 10/10 450.00 MKT Successful\n\
                     02 Feb 2024 10:00 S ITC Delivery ₹5,000.00 10/10 500.00 MKT Successful\n";

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = &parser;
                let engine = &engine;
                scope.spawn(move || {
                    let log = if i % 2 == 0 { BROKER_LOG } else { other_log };
                    engine.compute_report(&parser.parse(log))
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let text = handle.join().unwrap();
            if i % 2 == 0 {
                assert_eq!(text, expected);
            } else {
                assert!(text.contains("--- ITC ---"));
                assert!(!text.contains("Infosys"));
            }
        }
    });
}

#[test]
fn test_huge_quantities_do_not_panic() {
    let log = "01 Mar 2024 10:00 B ACME Delivery ₹10.00 10000000000000000000/10000000000000000000 1.00 MKT Successful\n\
               02 Mar 2024 10:00 B ACME Delivery ₹10.00 10000000000000000000/10000000000000000000 1.00 MKT Successful\n\
               03 Mar 2024 10:00 S ACME Delivery ₹10.00 5/5 2.00 MKT Successful\n";

    let text = generate_report(log);

    assert!(text.contains("Sell 5 @ ₹2.00 on 03 Mar 2024 10:00\n"));
    assert!(text.contains("  Cost: ₹5.00\n"));
    assert!(!text.contains("Skipped sell"));
}

#[test]
fn test_json_output() {
    let outcome = LogParser::new().parse_with_diagnostics(BROKER_LOG);
    let report = ProfitEngine::new().compute(&outcome.transactions);

    let json = JsonReport {
        transactions: &outcome.transactions,
        report: &report,
        diagnostics: Some(&outcome.diagnostics),
    }
    .to_json_pretty()
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["transactions"].as_array().unwrap().len(), 7);
    assert_eq!(value["report"]["companies"][2]["company"], "Wipro");
    assert_eq!(value["report"]["companies"][2]["entries"][1]["kind"], "rejected");
    assert_eq!(value["diagnostics"]["skipped"].as_array().unwrap().len(), 1);

    let without_diagnostics = JsonReport {
        transactions: &outcome.transactions,
        report: &report,
        diagnostics: None,
    }
    .to_json_pretty()
    .unwrap();
    assert!(!without_diagnostics.contains("\"diagnostics\""));
}
