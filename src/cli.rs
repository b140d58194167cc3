// src/cli.rs
use std::{env, error::Error, io::{self, Write}};

use crate::config::{locale::Locale, options::ExtractOptions};
use crate::progress::Progress;
use crate::record::PerfumeRecord;
use crate::scrape::{self, PageSource};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub opts: ExtractOptions,
    pub pages: Vec<PageSource>,
}

/// Progress lines on stderr; stdout stays clean for the report.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, index: usize, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] #{index} {label}", self.done, self.total);
    }
    fn item_failed(&mut self, index: usize, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] #{index} FAILED {reason}", self.done, self.total);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    logf!("CLI: {} page(s), locale {}", params.pages.len(), params.opts.locale);

    let mut progress = StderrProgress { total: 0, done: 0 };
    let results = scrape::collect_records(&params.pages, &params.opts, Some(&mut progress));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for (src, res) in params.pages.iter().zip(&results) {
        writeln!(out, "== {}", src.path.display())?;
        match res {
            Ok(rec) => write_report(&mut out, rec)?,
            Err(msg) => { failed += 1; writeln!(out, "Error: {msg}")?; }
        }
        writeln!(out)?;
    }
    out.flush()?;

    if failed == results.len() && !results.is_empty() {
        return Err(format!("no page could be extracted ({failed} failed)").into());
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--locale" => {
                let v = args.next().ok_or("Missing value for --locale")?;
                params.opts.locale = v.parse::<Locale>()?; }
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                let last = params.pages.last_mut().ok_or("--url must follow a page path")?;
                last.url = Some(v); }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {}", flag).into()),
            path => params.pages.push(PageSource::new(path)),
        }
    }
    if params.pages.is_empty() {
        return Err("Specify at least one saved page (see --help)".into());
    }
    Ok(params)
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("-")
}

/// Human-readable dump of one record.
pub fn write_report<W: Write>(mut w: W, rec: &PerfumeRecord) -> io::Result<()> {
    writeln!(w, "ID: {}", opt(&rec.id))?;
    writeln!(w, "Name: {}", opt(&rec.name))?;
    writeln!(w, "House: {}", opt(&rec.house))?;
    writeln!(w, "Launched: {}", opt(&rec.launch_year))?;
    writeln!(w, "Perfumers: {}", rec.creators.join(", "))?;
    writeln!(w, "Image: {}", opt(&rec.image_url))?;
    writeln!(w, "Description: {}", opt(&rec.description))?;
    writeln!(w, "Family: {}", opt(&rec.family))?;

    let accords: Vec<String> = rec.accords.iter()
        .map(|a| join!(&a.name, " ", &a.weight.to_string(), "%"))
        .collect();
    writeln!(w, "Accords: {}", accords.join(", "))?;

    for (key, notes) in rec.notes.iter() {
        writeln!(w, "Notes ({key}): {}", notes.join(", "))?;
    }

    match rec.rating {
        Some(r) => writeln!(w, "Rating: {r} / 5")?,
        None => writeln!(w, "Rating: -")?,
    }
    match rec.rating_count {
        Some(n) => writeln!(w, "Votes: {n}")?,
        None => writeln!(w, "Votes: -")?,
    }

    let tenacity: Vec<String> = rec.tenacity.iter()
        .map(|t| format!("{} {}", t.modality, t.votes))
        .collect();
    writeln!(w, "Longevity: {}", tenacity.join(", "))
}
