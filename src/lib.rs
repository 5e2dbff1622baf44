#![doc = r#"
pacecalc — a running pace calculator.

Give two of pace, time and distance and get the third. The crate is a small
parsing and formatting engine for the notations runners actually type:
`10k`, `3.1mi`, `half marathon`, `1:45:00`, `1h45m`, `1.5h`, `4:30` (min/km).
It powers the `pacecalc` CLI and can be embedded directly.

Quick start
-----------
```rust
use pacecalc::{Preposition, dispatch};

fn main() -> pacecalc::Result<()> {
    // distance in time -> pace
    assert_eq!(dispatch("marathon", Preposition::In, "2:01:09")?, "2:52min/km");
    // distance at pace -> time
    assert_eq!(dispatch("10k", Preposition::At, "6:00")?, "1:00:00");
    // time at pace -> distance
    assert_eq!(dispatch("57m", Preposition::At, "6:00")?, "9.5km");
    Ok(())
}
```

Structured results
------------------
```rust
use pacecalc::{Preposition, Quantity, calculate};

fn main() -> pacecalc::Result<()> {
    let result = calculate("10km", Preposition::In, "50:00")?;
    assert_eq!(result.quantity, Quantity::Pace);
    assert_eq!(result.value, 5.0);
    Ok(())
}
```

Error handling
--------------
Every failure is a `pacecalc::Error` naming the rejected token and what it was
read as; nothing is coerced to zero.

```rust
use pacecalc::{Error, parse_time};

match parse_time("1h30") {
    Err(Error::InvalidTime { token }) => assert_eq!(token, "1h30"),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — classify tokens and compute the missing quantity.
- [`core`](crate::core) — individual parsers, the duration formatter and unit tables.
- [`types`] — `Preposition` and `Quantity`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::distance::parse_distance;
pub use crate::core::duration::format_duration;
pub use crate::core::pace::parse_pace;
pub use crate::core::params::CalculationParams;
pub use crate::core::time::parse_time;
pub use error::{Error, InputKind, Result};
pub use types::{Preposition, Quantity};

pub use api::{
    Calculation, calculate, calculate_distance, calculate_pace, calculate_time,
    calculate_with_params, dispatch, is_time,
};
