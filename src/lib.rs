/*!
# bom-fix

Rewrites text files from "UTF-8, optionally BOM-prefixed" to "UTF-8 without
a BOM", in place.

## Architecture

```text
bom-fix
├── Core           - Error taxonomy, BOM-aware read / BOM-free write
├── Configuration  - Target list, write mode, TOML / YAML targets files
├── Normalizer     - normalize() per file, run() over the list
└── CLI common     - Logging, shared arguments, text / JSON output
```

## Usage

### CLI
```bash
# Built-in target list
bom-fix

# Explicit files, atomic replace
bom-fix --atomic src/App.jsx src/index.jsx

# Targets file, JSON report
bom-fix --targets bomfix.toml --format json
```

### Library
```rust,no_run
use bom_fix::{normalize, run, NormalizeOptions, TargetList};

let fixed = normalize("src/App.jsx")?;
println!("BOM removed: {}", fixed.had_bom);

let targets = TargetList::new(["a.txt", "b.txt"]);
let report = run(&targets, &NormalizeOptions::default(), &mut std::io::stdout())?;
assert_eq!(report.outcomes.len(), 2);
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod cli_common;
pub mod configuration;
pub mod core;
pub mod normalizer;

pub use configuration::{TargetList, WriteMode};
pub use self::core::{ErrorKind, NormalizeError, NormalizeResult};
pub use normalizer::{
    normalize, normalize_with, run, run_with, FileOutcome, NormalizeOptions, Normalized, RunReport,
};
