// SPDX-License-Identifier: MIT
//
// Soft validation warnings reach the `log` facade.
//
// Kept to a single test: the logger is process-global.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use pretty_assertions::assert_eq;
use tonewheel::{HueType, PaletteGenerator, PaletteType, ProbabilityWarnings, Xorshift32};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture;

fn take() -> Vec<String> {
    std::mem::take(&mut *RECORDS.lock().unwrap())
}

#[test]
fn probability_warnings_are_logged() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let mut palette = PaletteGenerator::new(PaletteType::Triadic, 0.0, Xorshift32::new(1));
    palette.set_hue_type(HueType::Uniform);
    assert_eq!(take(), Vec::<String>::new());

    // Exact sum, matching hue type: silent.
    let flags = palette.set_probabilities(0.2, 0.3, 0.5);
    assert_eq!(flags, ProbabilityWarnings::empty());
    assert_eq!(take(), Vec::<String>::new());
    assert_eq!(
        (palette.black_probability(), palette.white_probability(), palette.saturated_probability()),
        (0.2, 0.3, 0.5)
    );

    // Sum of 1.1: warned, stored anyway.
    let flags = palette.set_probabilities(0.2, 0.3, 0.6);
    assert_eq!(flags, ProbabilityWarnings::SUM_MISMATCH);
    let logged = take();
    assert_eq!(logged.len(), 1);
    assert!(logged[0].contains("do not add up to one"), "{logged:?}");
    assert_eq!(palette.saturated_probability(), 0.6);

    // Overload switches the hue type.
    let flags = palette.set_probabilities_with_root(0.0, 0.0, 1.0, 0.5);
    assert_eq!(flags, ProbabilityWarnings::HUE_TYPE_SWITCHED);
    let logged = take();
    assert_eq!(logged.len(), 1);
    assert!(logged[0].contains("skewed-root"), "{logged:?}");
}
