//! Batch CSV scoring against the example artifacts.

use std::path::PathBuf;
use std::sync::Arc;

use loan_screen::config::ArtifactConfig;
use loan_screen::scoring::{
    artifacts, BatchScorer, BatchSummary, LoanDecision, LogisticModel, PredictionService,
    StandardScaler,
};

const CSV_HEADER: &str = "Name,Gender,Married,Dependents,Education,Self Employed,Applicant Income,Coapplicant Income,Loan Amount,Loan Term,Credit History,Property Area";

fn build_service() -> PredictionService<StandardScaler, LogisticModel> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../artifacts");
    let config = ArtifactConfig {
        model_path: root.join("model.json"),
        scaler_path: root.join("scaler.json"),
    };
    let artifacts = artifacts::load(&config).expect("example artifacts load");
    PredictionService::new(Arc::new(artifacts.scaler), Arc::new(artifacts.model))
}

#[test]
fn csv_rows_score_through_the_real_artifacts() {
    let service = build_service();
    let scorer = BatchScorer::new(&service);

    let csv = format!(
        "{CSV_HEADER}\n\
         Ava Martin,Male,Yes,0,Graduate,No,5000,0,150,360,1.0,Urban\n\
         Noor Haddad,Female,No,3+,Not Graduate,Yes,2800,1200,90,180,0.0,Rural\n"
    );

    let report = scorer.score_reader(csv.as_bytes()).expect("batch runs");

    assert_eq!(report.outcomes.len(), 2);
    let first = report.outcomes[0].result.as_ref().expect("row scores");
    assert_eq!(first.decision, LoanDecision::Approved);
    let second = report.outcomes[1].result.as_ref().expect("row scores");
    assert_eq!(second.decision, LoanDecision::Rejected);
    assert_eq!(
        report.summary(),
        BatchSummary {
            approved: 1,
            rejected: 1,
            failed: 0,
        }
    );
}

#[test]
fn row_failures_do_not_abort_the_export() {
    let service = build_service();
    let scorer = BatchScorer::new(&service);

    let csv = format!(
        "{CSV_HEADER}\n\
         Ava Martin,Male,Yes,many,Graduate,No,5000,0,150,360,1.0,Urban\n\
         Noor Haddad,Female,No,1,Graduate,No,4100,0,120,360,1.0,Semiurban\n"
    );

    let report = scorer.score_reader(csv.as_bytes()).expect("batch runs");

    let summary = report.summary();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.approved + summary.rejected, 1);
}
