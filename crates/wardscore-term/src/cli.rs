use clap::Parser;

/// Interactive ward observation board with early-warning scoring.
#[derive(Debug, Default, Parser)]
#[command(name = "wardscore", version)]
pub struct Cli {
    /// Start with the strict incomplete-data gate on (session only, not
    /// persisted).
    #[arg(long)]
    pub strict: bool,

    /// Colour every cell with the overall band instead of its own zone
    /// (session only, not persisted).
    #[arg(long)]
    pub band_cells: bool,

    /// Disable coloured output.
    #[arg(long)]
    pub plain: bool,
}
