use iconforge::{GeneratedIcon, IconError, IconOutcome, generate_icons};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Icon(IconError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Icon(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IconError> for CliError {
    fn from(value: IconError) -> Self {
        Self::Icon(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    out_dir: Option<String>,
}

fn usage() -> &'static str {
    "iconforge-cli\n\
\n\
USAGE:\n\
  iconforge-cli [--out-dir <path>]\n\
\n\
NOTES:\n\
  - Writes icon16.png, icon32.png, icon48.png and icon128.png.\n\
  - Files go to the current directory unless --out-dir is given; the\n\
    directory is created if missing.\n\
  - If a size fails to render, a 1x1 placeholder PNG is written under the\n\
    same name so the manifest reference never dangles.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--out-dir" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if args.out_dir.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.out_dir = Some(dir.clone());
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn report_icon(icon: &GeneratedIcon) {
    let name = icon
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| icon.path.display().to_string());
    match &icon.outcome {
        IconOutcome::Drawn => {
            println!("Wrote {name} ({0}x{0})", icon.size);
        }
        IconOutcome::Placeholder(err) => {
            println!("Wrote {name} (1x1 placeholder)");
            eprintln!("{name}: {err}; wrote 1x1 placeholder");
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let out_dir = std::path::PathBuf::from(args.out_dir.as_deref().unwrap_or("."));
    std::fs::create_dir_all(&out_dir)?;

    for icon in generate_icons(&out_dir)? {
        report_icon(&icon);
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
