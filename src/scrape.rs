// src/scrape.rs
use std::{
    error::Error, fs, path::PathBuf, thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::{ consts::WORKERS, options::ExtractOptions },
    core::Page,
    progress::Progress,
    record::{ self, PerfumeRecord },
};

/// One saved detail page, plus the URL it came from when known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSource {
    pub path: PathBuf,
    pub url: Option<String>,
}

impl PageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), url: None }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Parse markup and extract. Only fails when the input is not markup at all.
pub fn extract_markup(
    markup: &str,
    url: Option<&str>,
    opts: &ExtractOptions,
) -> Result<PerfumeRecord, Box<dyn Error>> {
    let page = Page::parse(markup)?;
    Ok(record::extract(&page, url, opts))
}

fn extract_source(src: &PageSource, opts: &ExtractOptions) -> Result<PerfumeRecord, String> {
    let markup = fs::read_to_string(&src.path)
        .map_err(|e| format!("{}: {e}", src.path.display()))?;
    extract_markup(&markup, src.url.as_deref(), opts)
        .map_err(|e| format!("{}: {e}", src.path.display()))
}

/// Extract every page with a small worker pool.
/// Output order matches `sources`; a bad page is an `Err` in its slot and
/// never stops the others.
pub fn collect_records(
    sources: &[PageSource],
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<Result<PerfumeRecord, String>> {

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
        p.log(&format!("Extracting {} page(s), locale {}…", sources.len(), opts.locale));
    }

    type Outcome = (usize, Result<PerfumeRecord, String>);

    let shared = Arc::new(sources.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();

    let workers = WORKERS.min(sources.len()).max(1);

    // Spawn workers. Each parses its own documents; nothing is shared but the inputs.
    for _ in 0..workers {
        let sources = Arc::clone(&shared);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let opts = opts.clone();

        thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= sources.len() {
                        break;
                    }
                    let _ = tx.send((i, extract_source(&sources[i], &opts)));
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut slots: Vec<Option<Result<PerfumeRecord, String>>> = vec![None; sources.len()];

    for _ in 0..sources.len() {
        match res_rx.recv() {
            Ok((i, Ok(rec))) => {
                logd!("Page {i}: '{}', {} scalar fields missing", rec.label(), rec.missing_fields());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &rec.label());
                }
                slots[i] = Some(Ok(rec));
            }
            Ok((i, Err(msg))) => {
                loge!("Page {i}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &msg);
                }
                slots[i] = Some(Err(msg));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!("Batch done: {} pages", sources.len());

    slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.unwrap_or_else(|| Err(format!("page {i}: worker stopped"))))
        .collect()
}
