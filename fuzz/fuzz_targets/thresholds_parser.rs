#![no_main]

use libfuzzer_sys::fuzz_target;
use rabbitbench::metric::MetricKey;
use rabbitbench::threshold::check_threshold;
use rabbitbench::thresholds_file::ThresholdsFile;

fuzz_target!(|data: &[u8]| {
    // Arbitrary TOML must never panic the loader, and whatever loads must
    // evaluate without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(file) = ThresholdsFile::from_toml_str(input) {
            let key = MetricKey::new("fuzz", "latency", "main", "ci");
            for rule in file.resolve(&key) {
                let _ = check_threshold(&rule.config(), 120.0, &[100.0, 100.0]);
            }
        }
    }
});
