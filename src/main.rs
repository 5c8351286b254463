use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pathops::path::{Flavor, PathOps, WorkingDirectory};

/// Runs a single lexical path operation and prints the result.
#[derive(Debug, Parser)]
#[command(name = "pathops", version)]
struct Cli {
    /// Path dialect to follow.
    #[arg(long, short, env = "PATHOPS_FLAVOR", default_value_t = Flavor::native())]
    flavor: Flavor,

    /// Absolute directory that `resolve` and `relative` anchor relative paths to. Defaults to the
    /// current directory of this process.
    #[arg(long, env = "PATHOPS_CWD")]
    cwd: Option<String>,

    #[command(subcommand)]
    op: Op,
}

#[derive(Debug, Subcommand)]
enum Op {
    Normalize { path: String },
    Dirname { path: String },
    Basename {
        path: String,
        /// Suffix to strip from the result.
        #[arg(long)]
        ext: Option<String>,
    },
    Extname { path: String },
    Join { parts: Vec<String> },
    Resolve { parts: Vec<String> },
    Relative { from: String, to: String },
    IsAbsolute { path: String },
    Parse { path: String },
    /// Prints a fixed set of sample calls next to their results.
    Probe,
}

fn main() -> Result<()> {
    install_tracing();

    let cli = Cli::parse();
    let ops = path_ops(cli.flavor, cli.cwd.as_deref())?;
    debug!(flavor = %ops.flavor(), cwd = %ops.cwd(), "running {:?}", cli.op);

    for line in run(&ops, cli.op)? {
        println!("{line}");
    }
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_env("PATHOPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn path_ops(flavor: Flavor, cwd: Option<&str>) -> Result<PathOps> {
    let cwd = match cwd {
        Some(cwd) => WorkingDirectory::new(flavor, cwd)
            .with_context(|| format!("invalid --cwd for {flavor}"))?,
        None if flavor == Flavor::native() => WorkingDirectory::from_process()?,
        // The process directory means nothing in a foreign dialect, so fall back to its root.
        None => WorkingDirectory::new(flavor, flavor.sep().to_string())?,
    };
    Ok(PathOps::with_cwd(cwd))
}

fn run(ops: &PathOps, op: Op) -> Result<Vec<String>> {
    let lines = match op {
        Op::Normalize { path } => vec![ops.normalize(&path)],
        Op::Dirname { path } => vec![ops.dirname(&path)],
        Op::Basename { path, ext } => vec![ops.basename(&path, ext.as_deref())],
        Op::Extname { path } => vec![ops.extname(&path)],
        Op::Join { parts } => vec![ops.join(parts)],
        Op::Resolve { parts } => vec![ops.resolve(parts)],
        Op::Relative { from, to } => vec![ops.relative(&from, &to)],
        Op::IsAbsolute { path } => vec![ops.is_absolute(&path).to_string()],
        Op::Parse { path } => {
            let parsed = ops.parse(&path);
            vec![
                format!("root: '{}'", parsed.root),
                format!("dir:  '{}'", parsed.dir),
                format!("base: '{}'", parsed.base),
                format!("ext:  '{}'", parsed.ext),
                format!("name: '{}'", parsed.name),
            ]
        },
        Op::Probe => probe(ops)?,
    };
    Ok(lines)
}

fn probe(ops: &PathOps) -> Result<Vec<String>> {
    let posix = Flavor::Posix;
    let posix_cwd = match ops.flavor() {
        Flavor::Posix => ops.cwd().clone(),
        Flavor::Win32 => WorkingDirectory::new(posix, "/")?,
    };

    Ok(vec![
        format!("normalize(\"//\"): '{}'", posix.normalize("//")),
        format!("dirname(\"a/b/\"): '{}'", posix.dirname("a/b/")),
        format!("basename(\"a/b/\"): '{}'", posix.basename("a/b/", None)),
        format!("extname(\"main.mbt.md\"): '{}'", posix.extname("main.mbt.md")),
        format!("extname(\"main.mbt.md/\"): '{}'", posix.extname("main.mbt.md/")),
        format!("relative(\"../..\", \"a\"): '{}' (cwd {posix_cwd})", posix.relative("../..", "a", &posix_cwd)),
        format!("join(\"a\", \"/b\"): '{}'", posix.join(["a", "/b"])),
        format!("win32.join(\"C:\\a\", \"D:\\b\"): '{}'", Flavor::Win32.join(["C:\\a", "D:\\b"])),
        format!("resolve(\"a\", \"/b\"): '{}'", posix.resolve(["a", "/b"], &posix_cwd)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(flavor: Flavor, cwd: &str) -> PathOps {
        PathOps::new(flavor, cwd).expect("absolute cwd")
    }

    #[test]
    fn test_cli_parses_ops() {
        let cli = Cli::try_parse_from(["pathops", "--flavor", "win32", "--cwd", "C:\\x", "join", "a", "b"])
            .expect("valid arguments");
        assert_eq!(cli.flavor, Flavor::Win32);
        assert_eq!(cli.cwd.as_deref(), Some("C:\\x"));
        assert_eq!(run(&ops(cli.flavor, "C:\\x"), cli.op).expect("join"), ["a\\b"]);

        let cli = Cli::try_parse_from(["pathops", "-f", "posix", "basename", "/a/b.txt", "--ext", ".txt"])
            .expect("valid arguments");
        assert_eq!(run(&ops(cli.flavor, "/"), cli.op).expect("basename"), ["b"]);
    }

    #[test]
    fn test_cli_rejects_unknown_flavor() {
        assert!(Cli::try_parse_from(["pathops", "--flavor", "mac", "normalize", "a"]).is_err());
    }

    #[test]
    fn test_path_ops_cwd() {
        let ops = path_ops(Flavor::Posix, Some("/x/y")).expect("absolute cwd");
        let lines = run(&ops, Op::Relative { from: "../..".into(), to: "a".into() }).expect("relative");
        assert_eq!(lines, ["x/y/a"]);

        assert!(path_ops(Flavor::Posix, Some("x/y")).is_err(), "A relative --cwd should be rejected.");
    }

    #[test]
    fn test_probe_output() {
        let lines = probe(&ops(Flavor::Posix, "/x/y")).expect("probe");
        assert_eq!(lines[0], "normalize(\"//\"): '/'");
        assert_eq!(lines[5], "relative(\"../..\", \"a\"): 'x/y/a' (cwd /x/y)");
        assert_eq!(lines[7], "win32.join(\"C:\\a\", \"D:\\b\"): 'C:\\a\\D:\\b'");
        assert_eq!(lines[8], "resolve(\"a\", \"/b\"): '/b'");
    }
}
