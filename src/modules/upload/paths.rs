use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use time::OffsetDateTime;

/// Storage-relative names for one upload: where the original bytes land
/// and where the encoder writes the MP3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedPaths {
    pub input: String,
    pub output: String,
}

/// Derives `<field>-<stamp>.<ext>` for the input and the same name with a
/// `.mp3` extension for the output. The stamp is strictly increasing
/// process-wide, so concurrent requests can never collide on disk.
pub fn allocate(field_name: &str, original_name: &str) -> AllocatedPaths {
    let stamp = next_stamp();
    let stem = format!("{}-{}", field_name, stamp);

    let input = match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.clone(),
    };

    AllocatedPaths {
        input,
        output: format!("{}.mp3", stem),
    }
}

// Nanosecond clock reading, bumped past the previous value on ties. The
// wall clock alone is not unique under rapid repeated calls.
fn next_stamp() -> i64 {
    static LAST: AtomicI64 = AtomicI64::new(0);

    let now = OffsetDateTime::now_utc().unix_timestamp_nanos() as i64;
    let mut prev = LAST.load(Ordering::Relaxed);
    loop {
        let candidate = if now > prev { now } else { prev + 1 };
        match LAST.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(observed) => prev = observed,
        }
    }
}
