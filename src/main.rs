use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use std::{
    env,
    io::{self, BufRead, BufWriter, Write},
};

use chinese_numbers::{
    annotation::{render_json_line, render_sgml_line, render_spans_line, OutputFormat},
    chinese_number::finder::{find_chinese_numbers, FinderOptions},
    utility::str::is_token_space,
};

struct Args {
    translate_yi: bool,
    encoding: &'static Encoding,
    format: OutputFormat,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("1", "translate-yi", "translate yi1 as 1");
    opts.optopt("e", "encoding", "text encoding (default: utf-8)", "LABEL");
    opts.optopt("f", "format", "output format: json, sgml or spans (default: json)", "FORMAT");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: chinese-numbers [options] < input"));
        return Ok(None);
    }

    let encoding = match matches.opt_str("e") {
        Some(label) => Encoding::for_label(label.as_bytes())
            .with_context(|| format!("Unknown encoding: {}", label))?,
        None => encoding_rs::UTF_8,
    };

    let format = match matches.opt_str("f") {
        Some(name) => OutputFormat::of(&name)?,
        None => OutputFormat::Json,
    };

    Ok(Some(Args {
        translate_yi: matches.opt_present("1"),
        encoding,
        format,
    }))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let options = FinderOptions {
        translate_yi: args.translate_yi,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for bytes in stdin.lock().split(b'\n') {
        let bytes = bytes.context("Failed to read stdin")?;
        let (line, _, _) = args.encoding.decode(&bytes);
        let line = line.trim_end_matches(is_token_space);

        let spans = find_chinese_numbers(line, &options);

        match args.format {
            OutputFormat::Json => {
                writeln!(out, "{}", render_json_line(&spans)?)?;
            }
            OutputFormat::Sgml => {
                let rendered = render_sgml_line(line, &spans);
                out.write_all(&args.encoding.encode(&rendered).0)?;
                out.write_all(b"\n")?;
            }
            OutputFormat::Spans => {
                writeln!(out, "{}", render_spans_line(&spans)?)?;
            }
        }
    }

    out.flush().context("Failed to write stdout")?;

    Ok(())
}
