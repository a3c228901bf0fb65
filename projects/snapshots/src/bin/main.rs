use std::process::ExitCode;

use projects_snapshots::job::{self, MainError, EXIT_FAILURE};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(source) = utils_trace::init("info") {
        eprintln!("{}", MainError::TracingInit { source });
        return ExitCode::from(EXIT_FAILURE);
    }

    let outcome = job::settle(tokio::spawn(job::collect_snapshot()).await);

    if let Err(err) = &outcome {
        error!("snapshot collection aborted: {err}");
    }

    ExitCode::from(job::exit_status(&outcome))
}
