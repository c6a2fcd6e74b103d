use funding_analysis::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = "\
date,startup,vertical,subvertical,city,investors,round,amount
2020-01-09,Byju's,EdTech,Online Tutoring,Bengaluru,\"Tiger Global Management\",Private Equity,1500
2020-01-13,Shuttl,Transportation,App Based Shuttle Service,Gurgaon,\"Susquehanna Growth Equity\",Series C,66
2019-12-12,Byju's,EdTech,Online Learning,Bengaluru,\"General Atlantic, Sequoia Capital\",Series F,1000
2019-12-10,Ola,Transportation,Ride Hailing,Bengaluru,\"Sequoia, Tiger\",Series J,
2019-01-09,Acme,Fintech,Payments,Mumbai,\"Sequoia Capital India, Accel\",Seed,10
2019-02-09,Acme,Fintech,Payments,Mumbai,Accel,Series A,50
2019-03-09,Acme,Fintech,Payments,Mumbai,Kalaari,Series B,30
";

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn open(contents: &str) -> (NamedTempFile, Session) {
    let file = write_fixture(contents);
    let config = AnalysisConfiguration {
        data_path: file.path().to_path_buf(),
        ..AnalysisConfiguration::default()
    };
    let session = Session::open(config).unwrap();
    (file, session)
}

#[test]
fn test_total_invested_counts_every_reported_amount() {
    let (_file, session) = open(FIXTURE);
    let engine = session.engine();

    let expected: f64 = session.dataset().iter().filter_map(|r| r.amount).sum();
    assert_eq!(engine.total_invested(), expected);
    assert_eq!(engine.total_invested(), 2656.0);
    assert_eq!(engine.distinct_startup_count(), 4);
}

#[test]
fn test_overall_report() {
    let (_file, session) = open(FIXTURE);

    let report = session.overall_report(Measure::Total, None);

    assert_eq!(report.summary.max_single_raise, Some(1500.0));
    assert_eq!(report.summary.max_raise_startup.as_deref(), Some("Byju's"));
    assert_eq!(report.selected_year, Some(2019));
    assert_eq!(report.years, vec![2019, 2020]);

    let months = report.monthly_trend.keys();
    assert_eq!(months, vec!["1-2019", "2-2019", "3-2019", "12-2019", "1-2020"]);
    assert_eq!(report.monthly_trend.get("12-2019"), Some(1000.0));

    assert_eq!(
        report.sectors_by_amount.keys(),
        vec!["EdTech", "Fintech", "Transportation"]
    );
    assert_eq!(report.sectors_by_count.values(), vec![3.0, 2.0, 2.0]);
    assert_eq!(report.cities_by_count.keys(), vec!["Bengaluru", "Mumbai", "Gurgaon"]);
    assert_eq!(report.top_startups_for_year.keys(), vec!["Byju's", "Acme"]);
    assert_eq!(report.top_startups_overall.len(), 3);
}

#[test]
fn test_monthly_count_trend() {
    let (_file, session) = open(FIXTURE);

    let report = session.overall_report(Measure::Count, Some(2020));

    assert_eq!(report.monthly_trend.get("12-2019"), Some(2.0));
    assert_eq!(report.monthly_trend.get("1-2020"), Some(2.0));
    assert_eq!(report.top_startups_for_year.keys(), vec!["Byju's", "Shuttl"]);
}

#[test]
fn test_investor_view_uses_substring_matching() {
    let (_file, session) = open(FIXTURE);

    let report = session.investor_report("Seq", None);

    //"Sequoia Capital", "Sequoia" and "Sequoia Capital India" all match
    assert_eq!(report.num_investments, 3);
    let startups: Vec<_> = report
        .recent_investments
        .iter()
        .map(|row| row.startup.as_str())
        .collect();
    assert_eq!(startups, vec!["Byju's", "Ola", "Acme"]);
    assert_eq!(report.total_invested, 1010.0);
    assert_eq!(report.year_over_year.keys(), vec!["2019"]);
}

#[test]
fn test_investor_view_exact_matching() {
    let (_file, session) = open(FIXTURE);

    let report = session.investor_report("Sequoia", Some(InvestorMatch::Exact));

    assert_eq!(report.num_investments, 1);
    assert_eq!(report.recent_investments[0].startup, "Ola");
}

#[test]
fn test_startup_view() {
    let (_file, session) = open(FIXTURE);

    let report = session.startup_report("Byju's");
    let profile = report.profile.as_ref().unwrap();

    assert_eq!(profile.sub_industry.as_deref(), Some("Online Tutoring"));
    assert_eq!(report.total_raised, 2500.0);
    assert_eq!(report.funding_history.len(), 2);
}

#[test]
fn test_selection_lists() {
    let (_file, session) = open(FIXTURE);

    assert_eq!(
        session.startup_names(),
        vec!["Acme", "Byju's", "Ola", "Shuttl"]
    );

    let investors = session.investor_names();
    assert!(investors.contains(&"Sequoia Capital India".to_string()));
    assert!(investors.contains(&"Tiger".to_string()));
    assert_eq!(investors.iter().filter(|i| i.as_str() == "Accel").count(), 1);
}

#[test]
fn test_malformed_date_aborts_session() {
    let contents = "\
date,startup,vertical,subvertical,city,investors,round,amount
2019-01-09,Acme,Fintech,Payments,Mumbai,Accel,Seed,10
31/31/2019,Beta,Fintech,Payments,Mumbai,Accel,Seed,10
";
    let file = write_fixture(contents);
    let config = AnalysisConfiguration {
        data_path: file.path().to_path_buf(),
        ..AnalysisConfiguration::default()
    };

    let err = Session::open(config).unwrap_err();
    let data_err = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<DataError>())
        .unwrap();
    assert!(matches!(data_err, DataError::MalformedDate { line: 3, .. }));
}

#[test]
fn test_report_json_output() {
    let (_file, session) = open(FIXTURE);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overall.json");

    session
        .overall_report(Measure::Total, None)
        .save_json(&path)
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["summary"]["funded_startups"], 4);
    assert_eq!(json["monthly_trend"]["entries"][0]["key"], "1-2019");
}
