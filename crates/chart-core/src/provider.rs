// File: crates/chart-core/src/provider.rs
// Summary: Bar-data provider boundary: typed JSON/CSV decoding into validated, ordered bars.

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ParseError, ProviderError};
use crate::series::Bar;

/// Source of the ordered bar sequence. Fetched once before the chart starts.
pub trait BarProvider {
    fn fetch(&self) -> Result<Vec<Bar>, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct ChunkDto {
    #[serde(rename = "Bars")]
    bars: Vec<BarDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BarDto {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    time: i64,
}

/// Decode the chunked payload `[{"Bars": [{"Open", "High", "Low", "Close", "Time"}, ...]}, ...]`.
/// Chunks are concatenated in order.
pub fn decode_chunked_json(text: &str) -> Result<Vec<Bar>, ParseError> {
    let chunks: Vec<ChunkDto> = serde_json::from_str(text)?;
    if chunks.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut out = Vec::with_capacity(chunks.iter().map(|c| c.bars.len()).sum());
    for dto in chunks.into_iter().flat_map(|c| c.bars) {
        let index = out.len();
        let bar = Bar::try_new(dto.open, dto.high, dto.low, dto.close, dto.time)
            .map_err(|source| ParseError::InvalidBar { index, source })?;
        out.push(bar);
    }
    ensure_chronological(&out)?;
    debug!(bars = out.len(), "decoded chunked JSON payload");
    Ok(out)
}

/// Decode OHLC CSV with a header row. Column names are matched case-insensitively
/// against common aliases; without a time column the row index is used.
pub fn decode_csv<R: Read>(reader: R) -> Result<Vec<Bar>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]).ok_or(ParseError::MissingColumn("open"))?;
    let i_high = idx(&["high", "h"]).ok_or(ParseError::MissingColumn("high"))?;
    let i_low = idx(&["low", "l"]).ok_or(ParseError::MissingColumn("low"))?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).ok_or(ParseError::MissingColumn("close"))?;
    if i_time.is_none() {
        warn!("no time column; using row index as time");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(row as u64 + 2);
        let field = |i: usize, name: &str| -> Result<f64, ParseError> {
            let raw = rec.get(i).unwrap_or("").trim();
            raw.parse::<f64>().map_err(|_| ParseError::InvalidRecord {
                line,
                reason: format!("{name} '{raw}' is not a number"),
            })
        };
        let time = match i_time {
            Some(ix) => {
                let raw = rec.get(ix).unwrap_or("");
                parse_epoch_secs(raw).ok_or_else(|| ParseError::InvalidRecord {
                    line,
                    reason: format!("time '{}' is not an epoch timestamp", raw.trim()),
                })?
            }
            None => row as i64,
        };
        let bar = Bar::try_new(field(i_open, "open")?, field(i_high, "high")?, field(i_low, "low")?, field(i_close, "close")?, time)
            .map_err(|source| ParseError::InvalidBar { index: out.len(), source })?;
        out.push(bar);
    }
    ensure_chronological(&out)?;
    debug!(bars = out.len(), "decoded CSV");
    Ok(out)
}

/// Epoch seconds, or milliseconds normalized to seconds.
fn parse_epoch_secs(s: &str) -> Option<i64> {
    let n = s.trim().parse::<i64>().ok()?;
    if n > 10_i64.pow(12) { Some(n / 1000) } else { Some(n) }
}

fn ensure_chronological(bars: &[Bar]) -> Result<(), ParseError> {
    match bars.windows(2).position(|w| w[1].time < w[0].time) {
        Some(i) => Err(ParseError::NonChronological { index: i + 1 }),
        None => Ok(()),
    }
}

/// Reads a chunked JSON payload from disk.
#[derive(Clone, Debug)]
pub struct JsonFileProvider {
    pub path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl BarProvider for JsonFileProvider {
    fn fetch(&self) -> Result<Vec<Bar>, ProviderError> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(decode_chunked_json(&text)?)
    }
}

/// Reads an OHLC CSV from disk.
#[derive(Clone, Debug)]
pub struct CsvFileProvider {
    pub path: PathBuf,
}

impl CsvFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl BarProvider for CsvFileProvider {
    fn fetch(&self) -> Result<Vec<Bar>, ProviderError> {
        let file = std::fs::File::open(&self.path)?;
        Ok(decode_csv(std::io::BufReader::new(file))?)
    }
}
