use std::sync::Arc;

use almanac_ext::{Almanac, AlmanacRegistry, EasterService};
use almanac_time::{compute_easter, CalendarSystem, MoveableFeast};
use anyhow::{ensure, Context, Result};
use easteralmanac::AlmanacConfig;
use tracing::info;

use crate::cli::{ComputeArgs, FeastsArgs, QueryArgs, TableArgs};

fn calendar(config: &AlmanacConfig, julian: bool) -> Result<CalendarSystem> {
    if julian {
        return Ok(CalendarSystem::Julian);
    }
    config.calendar().context("invalid [easter].calendar")
}

/// `compute`: one year.
pub fn compute(config: &AlmanacConfig, args: ComputeArgs) -> Result<()> {
    let calendar = calendar(config, args.julian)?;
    let easter = compute_easter(args.year, calendar);
    println!(
        "{} {} ({calendar}, day {} of March)",
        easter,
        args.year,
        easter.day_of_march()
    );
    Ok(())
}

/// `table`: a range of years, one per line.
pub fn table(config: &AlmanacConfig, args: TableArgs) -> Result<()> {
    ensure!(
        args.from <= args.to,
        "empty year range {}..={}",
        args.from,
        args.to
    );
    let calendar = calendar(config, args.julian)?;
    info!(from = args.from, to = args.to, %calendar, "printing Easter table");
    for year in args.from..=args.to {
        let easter = compute_easter(year, calendar);
        println!(
            "{year:>6}  {:<5} {:>2}",
            easter.month().short_name(),
            easter.day()
        );
    }
    Ok(())
}

/// `feasts`: every moveable feast of one year.
pub fn feasts(config: &AlmanacConfig, args: FeastsArgs) -> Result<()> {
    let calendar = calendar(config, args.julian)?;
    for feast in MoveableFeast::ALL {
        let date = feast
            .date(args.year, calendar)
            .with_context(|| format!("{feast} {}", args.year))?;
        match calendar {
            CalendarSystem::Gregorian => {
                println!("{:<16} {:<9} {date}", feast.name(), date.weekday().name());
            }
            CalendarSystem::Julian => {
                let (y, m, d) = date.julian_ymd();
                println!(
                    "{:<16} {:<9} {d} {m} {y} (Julian) = {date} (Gregorian)",
                    feast.name(),
                    date.weekday().name()
                );
            }
        }
    }
    Ok(())
}

/// `query`: register the Easter provider and answer one attribute through
/// the registry, the way a host almanac would.
pub fn query(config: &AlmanacConfig, args: QueryArgs) -> Result<()> {
    let rendered = answer(&AlmanacRegistry::global(), config, &args)?;
    println!("{rendered}");
    Ok(())
}

/// Answer `args.attr` with the Easter provider registered in `registry` for
/// the duration of the query.  The provider is removed again whether or not
/// the query succeeds.
fn answer(
    registry: &Arc<AlmanacRegistry>,
    config: &AlmanacConfig,
    args: &QueryArgs,
) -> Result<String> {
    let provider = config.easter_almanac().context("invalid [easter] settings")?;
    let formatter = config.formatter().context("invalid [format] settings")?;
    let service = EasterService::new(Arc::clone(registry), provider);

    let mut almanac = Almanac::current(formatter);
    if let Some(ts) = args.time {
        almanac = almanac.with_time(ts);
    }
    let rendered = almanac
        .get(registry, &args.attr)
        .with_context(|| format!("almanac query {:?}", args.attr))
        .and_then(|value| match &args.format {
            Some(fmt) => Ok(value.format(fmt)?),
            None => Ok(value.render()?),
        });

    service.shut_down()?;
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::Settings;

    // 2025-01-01T00:00:00Z
    const NEW_YEAR_2025: i64 = 1_735_689_600;

    fn utc_config() -> AlmanacConfig {
        AlmanacConfig::from_toml_str("[format]\ntimezone = \"utc\"\n").unwrap()
    }

    fn query_args(attr: &str, format: Option<&str>) -> QueryArgs {
        QueryArgs {
            attr: attr.to_string(),
            time: Some(NEW_YEAR_2025),
            format: format.map(str::to_string),
        }
    }

    #[test]
    fn table_rejects_empty_range() {
        let args = TableArgs {
            from: 2025,
            to: 2024,
            julian: false,
        };
        let err = table(&AlmanacConfig::default(), args).unwrap_err();
        assert!(err.to_string().contains("empty year range"));
    }

    #[test]
    fn answer_renders_and_deregisters() {
        let registry = Arc::new(AlmanacRegistry::new());
        let config = utc_config();

        let easter = answer(&registry, &config, &query_args("easter", None)).unwrap();
        assert_eq!(easter, "2025-04-20");
        let orthodox =
            answer(&registry, &config, &query_args("orthodox_easter", Some("%d %B"))).unwrap();
        assert_eq!(orthodox, "20 April");
        assert!(registry.is_empty());
    }

    #[test]
    fn failed_answer_still_deregisters() {
        let registry = Arc::new(AlmanacRegistry::new());
        let config = utc_config();

        assert!(answer(&registry, &config, &query_args("sunrise", None)).is_err());
        assert!(registry.is_empty());
        assert!(answer(&registry, &config, &query_args("easter", Some("%Q"))).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn query_through_global_registry() {
        let config = utc_config();
        query(&config, query_args("pentecost", None)).unwrap();
        assert!(query(&config, query_args("sunrise", None)).is_err());
        assert!(AlmanacRegistry::global().is_empty());
        assert_eq!(Settings::instance().almanac_time(), None);
    }
}
