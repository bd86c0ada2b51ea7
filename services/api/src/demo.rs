use crate::infra::build_classification_service;
use clap::Args;
use coursepath::classification::ClassificationResult;
use coursepath::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// The three chosen subject ids, e.g. `classify 6 1 2`
    #[arg(required = true, num_args = 1..)]
    pub(crate) subject_ids: Vec<i64>,
    /// Seed the subject directory from a catalog CSV export
    #[arg(long)]
    pub(crate) subjects_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the subject directory from a catalog CSV export
    #[arg(long)]
    pub(crate) subjects_csv: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let service = build_classification_service(args.subjects_csv.as_deref())?;
    let result = service.classify(&args.subject_ids)?;
    render_result(&args.subject_ids, &result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_classification_service(args.subjects_csv.as_deref())?;

    println!("Stream classification demo");
    println!("==========================");
    let streams = service.list_streams()?;
    println!("Active streams:");
    for summary in &streams {
        println!("  [{}] {}", summary.id.0, summary.name);
    }
    println!();

    let samples: &[(&str, &[i64])] = &[
        ("Combined Mathematics, Physics, Chemistry", &[6, 1, 2]),
        ("Biology, Chemistry, Physics", &[5, 2, 1]),
        ("Engineering Technology, Science for Technology, ICT", &[10, 12, 9]),
        ("Biosystems Technology, Science for Technology, Agriculture", &[11, 12, 8]),
        ("Business Studies, Economics, Accounting", &[27, 17, 28]),
        ("Three national languages", &[50, 51, 52]),
        ("Geography, History, Political Science", &[18, 21, 23]),
        ("Physics, Economics, Buddhism", &[1, 17, 29]),
        ("Duplicate subject submission", &[1, 1, 2]),
    ];

    for (label, triple) in samples {
        println!("{label} {triple:?}");
        let result = service.classify(triple)?;
        render_result(triple, &result);
        println!();
    }

    Ok(())
}

fn render_result(subject_ids: &[i64], result: &ClassificationResult) {
    if result.valid {
        println!(
            "  -> {} (rule: {})",
            result.stream_name.as_deref().unwrap_or("unknown"),
            result.matched_rule.as_deref().unwrap_or("unknown"),
        );
    } else {
        println!("  -> rejected {subject_ids:?}");
        for error in &result.errors {
            println!("     - {error}");
        }
    }
}
