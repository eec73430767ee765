use std::path::PathBuf;

use clap::Args;

/// Adjacency rule flags shared by `find` and `verify`
#[derive(Args, Debug, Clone, Default)]
pub struct DirectednessArgs {
    /// Treat `graph[i][j]` as a one-way edge i -> j
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat any entry between i and j as a two-way edge
    #[arg(long)]
    pub undirected: bool,
}

impl DirectednessArgs {
    /// The flag value, if either flag was given
    pub fn requested(&self) -> Option<bool> {
        match (self.directed, self.undirected) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Graph file (JSON or whitespace-separated rows); `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub directedness: DirectednessArgs,

    /// Abort the search after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Exit with status 1 when no Hamiltonian path exists
    #[arg(long)]
    pub require_path: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Run only this sample (triangle, square, directed-chain, no-path, pentagon)
    pub name: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Graph file (JSON or whitespace-separated rows); `-` reads stdin
    pub input: PathBuf,

    /// Candidate path as comma-separated vertex indices (e.g. 0,1,2)
    #[arg(long, value_delimiter = ',', required = true, num_args = 0..)]
    pub path: Vec<usize>,

    #[command(flatten)]
    pub directedness: DirectednessArgs,
}
