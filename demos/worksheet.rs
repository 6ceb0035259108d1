//! Print one worksheet per operation kind, with worked examples expanded.
//!
//! Run with: `cargo run --example worksheet`
//! Set `RUST_LOG=xmath_worksheet_gen=debug` to see the generator's log lines.
//!
//! ## Key concepts demonstrated
//!
//! - `WorksheetRequest::new(kind)` — minimal constructor; defaults to twelve
//!   two-by-two-digit exercises drawn from entropy.
//! - `rng_seed: Some(u64)` makes the batch fully reproducible.
//! - `worked_example_flags` marks the first exercise of each kind; only those
//!   get a step-by-step explanation.
//! - `to_worksheet_json` produces the card list a front end would render.

use tracing_subscriber::EnvFilter;
use xmath_worksheet_gen::{
    generate_worksheet, is_header, strip_markers, to_worksheet_json,
    worked_example_flags, OperationKind, OperationSelector, WorksheetConfig, WorksheetError,
    WorksheetRequest,
};

fn print_worksheet(title: &str, request: &WorksheetRequest) -> Result<(), WorksheetError> {
    let sheet = generate_worksheet(request)?;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{title}]  {} exercises  seed: {:?}", sheet.len(), request.rng_seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for (ex, worked) in sheet.iter().zip(worked_example_flags(&sheet)) {
        println!("  #{:<3} {:<28} {}", ex.id, ex.to_string(), ex.result);
        if worked {
            for step in ex.explanation()? {
                if is_header(&step) {
                    println!("        ▸ {}", strip_markers(&step));
                } else {
                    println!("          {}", strip_markers(&step));
                }
            }
            println!();
        }
    }
    println!();
    Ok(())
}

fn main() -> Result<(), WorksheetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── Minimal API ──────────────────────────────────────────────────────────
    let sheet = generate_worksheet(&WorksheetRequest::new(OperationKind::Addition))?;
    println!();
    println!("══ Minimal API: {} additions from entropy ══", sheet.len());
    println!();

    // ── One worksheet per kind ───────────────────────────────────────────────
    let kinds = [
        (OperationKind::Addition,          1001u64),
        (OperationKind::Subtraction,       2002),
        (OperationKind::Multiplication,    3003),
        (OperationKind::Division,          4004),
        (OperationKind::LinearEquation,    5005),
        (OperationKind::QuadraticEquation, 6006),
    ];
    for (kind, seed) in kinds {
        let request = WorksheetRequest {
            count: 4,
            config: WorksheetConfig { digits_top: 3, digits_bottom: 2, operation: kind.into() },
            rng_seed: Some(seed),
        };
        print_worksheet(&kind.to_string(), &request)?;
    }

    // ── Mixed selector + JSON cards ──────────────────────────────────────────
    let mixed = WorksheetRequest {
        count: 6,
        config: WorksheetConfig { digits_top: 2, digits_bottom: 1, operation: OperationSelector::Mixed },
        rng_seed: Some(7007),
    };
    print_worksheet("Mixed", &mixed)?;

    let cards = to_worksheet_json(&generate_worksheet(&mixed)?)?;
    println!("══ Card JSON ══");
    println!("{}", serde_json::to_string_pretty(&cards).unwrap_or_default());
    Ok(())
}
