use crate::infra::{
    parse_credit_history, parse_dependents, parse_education, parse_employment, parse_gender,
    parse_married, parse_property_area,
};
use clap::Args;
use loan_screen::config::AppConfig;
use loan_screen::error::AppError;
use loan_screen::scoring::{
    artifacts, BatchScorer, CreditHistory, Dependents, Education, Employment, Gender,
    LoanApplication, LogisticModel, MaritalStatus, PredictionService, PropertyArea, StandardScaler,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Applicant name shown in the rendered decision
    #[arg(long)]
    name: String,
    /// Gender (Male or Female)
    #[arg(long, value_parser = parse_gender)]
    gender: Gender,
    /// Married (Yes or No)
    #[arg(long, value_parser = parse_married)]
    married: MaritalStatus,
    /// Number of dependents (0, 1, 2, or 3+)
    #[arg(long, value_parser = parse_dependents)]
    dependents: Dependents,
    /// Education (Graduate or "Not Graduate")
    #[arg(long, value_parser = parse_education)]
    education: Education,
    /// Self employed (Yes or No)
    #[arg(long, value_parser = parse_employment)]
    self_employed: Employment,
    /// Applicant income
    #[arg(long)]
    applicant_income: f64,
    /// Coapplicant income
    #[arg(long)]
    coapplicant_income: f64,
    /// Loan amount
    #[arg(long)]
    loan_amount: f64,
    /// Loan term in days
    #[arg(long)]
    loan_term: f64,
    /// Credit history flag (1.0 or 0.0)
    #[arg(long, value_parser = parse_credit_history)]
    credit_history: CreditHistory,
    /// Property area (Urban, Semiurban, or Rural)
    #[arg(long, value_parser = parse_property_area)]
    property_area: PropertyArea,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of applicant rows to score
    #[arg(long)]
    csv: PathBuf,
}

fn build_service() -> Result<PredictionService<StandardScaler, LogisticModel>, AppError> {
    let config = AppConfig::load()?;
    let loaded = artifacts::load(&config.artifacts)?;
    Ok(PredictionService::new(
        Arc::new(loaded.scaler),
        Arc::new(loaded.model),
    ))
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let service = build_service()?;

    let application = LoanApplication {
        applicant_name: args.name,
        gender: args.gender,
        married: args.married,
        dependents: args.dependents,
        education: args.education,
        self_employed: args.self_employed,
        applicant_income: args.applicant_income,
        coapplicant_income: args.coapplicant_income,
        loan_amount: args.loan_amount,
        loan_term: args.loan_term,
        credit_history: args.credit_history,
        property_area: args.property_area,
    };

    let outcome = service.predict(&application)?;
    println!("{}", outcome.message());
    println!(
        "Classifier output: {} (evaluated {})",
        outcome.classifier_output, outcome.evaluated_at
    );

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = build_service()?;
    let report = BatchScorer::new(&service).score_path(&args.csv)?;

    println!(
        "Scored {} applications from {}",
        report.outcomes.len(),
        args.csv.display()
    );
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(prediction) => println!(
                "- row {}: {} -> {}",
                outcome.row,
                prediction.applicant_name,
                prediction.decision.label()
            ),
            Err(err) => println!("- row {}: failed ({err})", outcome.row),
        }
    }
    println!("\nSummary: {}", report.summary());

    Ok(())
}
