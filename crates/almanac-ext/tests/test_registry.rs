//! Integration tests: the Easter provider living in a registry next to other
//! providers, the way a host almanac uses it.

use std::sync::Arc;
use std::thread;

use almanac_core::errors::{Error, Result};
use almanac_ext::formatter::EPHEM_YEAR;
use almanac_ext::{
    Almanac, AlmanacProvider, AlmanacRegistry, AlmanacTimeZone, EasterAlmanac, EasterService,
    Formatter, TimeValue,
};
use almanac_time::CalendarSystem;

// 2025-01-01T00:00:00Z
const JAN_2025: i64 = 1_735_689_600;

/// Stand-in for the host's built-in astronomical provider.
#[derive(Debug)]
struct Astronomy;

impl AlmanacProvider for Astronomy {
    fn name(&self) -> &str {
        "Astronomy"
    }

    fn get_almanac_data(&self, almanac: &Almanac, attr: &str) -> Result<TimeValue> {
        match attr {
            // Pretend the sun always rises at 06:00 UTC.
            "sunrise" => {
                let midnight = almanac.time_ts() - almanac.time_ts().rem_euclid(86_400);
                Ok(TimeValue::new(
                    midnight + 6 * 3600,
                    "ephem_day",
                    Arc::clone(almanac.formatter()),
                ))
            }
            // The host answers "easter" too, but the extension must win.
            "easter" => Ok(TimeValue::new(0, EPHEM_YEAR, Arc::clone(almanac.formatter()))),
            other => Err(Error::UnknownAttribute(other.to_string())),
        }
    }
}

fn host_registry() -> Arc<AlmanacRegistry> {
    let registry = Arc::new(AlmanacRegistry::new());
    registry.push(Arc::new(Astronomy));
    registry
}

#[test]
fn extension_answers_before_host() {
    let registry = host_registry();
    let service = EasterService::new(Arc::clone(&registry), EasterAlmanac::default());
    assert_eq!(registry.names(), vec!["Easter", "Astronomy"]);

    let almanac = Almanac::utc(JAN_2025);
    let easter = almanac.get(&registry, "easter").unwrap();
    assert_eq!(easter.format("%Y-%m-%d %H:%M").unwrap(), "2025-04-20 12:00");

    // Attributes the extension does not know still reach the host.
    let sunrise = almanac.get(&registry, "sunrise").unwrap();
    assert_eq!(sunrise.format("%H:%M").unwrap(), "06:00");

    service.shut_down().unwrap();
    assert_eq!(almanac.get(&registry, "easter").unwrap().raw(), 0);
    assert_eq!(
        almanac.get(&registry, "good_friday"),
        Err(Error::UnknownAttribute("good_friday".into()))
    );
}

#[test]
fn almanac_at_another_time() {
    let registry = host_registry();
    let _service = EasterService::new(Arc::clone(&registry), EasterAlmanac::default());
    let almanac = Almanac::utc(JAN_2025);

    // 2000-06-15T00:00:00Z
    let y2k = almanac.with_time(961_027_200);
    let easter = y2k.get(&registry, "easter").unwrap();
    assert_eq!(easter.to_string(), "2000-04-23");
}

#[test]
fn year_follows_the_formatter_time_zone() {
    let registry = host_registry();
    let _service = EasterService::new(Arc::clone(&registry), EasterAlmanac::default());

    // 2024-12-31T23:30:00Z is already 2025 at UTC+01:00.
    let ts = JAN_2025 - 1800;
    let utc = Almanac::utc(ts);
    let cet = Almanac::new(ts, Formatter::new("+01:00".parse::<AlmanacTimeZone>().unwrap()));
    assert_eq!(utc.get(&registry, "easter").unwrap().format("%Y-%m-%d").unwrap(), "2024-03-31");
    assert_eq!(cet.get(&registry, "easter").unwrap().format("%Y-%m-%d").unwrap(), "2025-04-20");
}

#[test]
fn julian_configuration() {
    let registry = host_registry();
    let almanac = EasterAlmanac::new(CalendarSystem::Julian, 12).unwrap();
    let _service = EasterService::new(Arc::clone(&registry), almanac);
    // 2024-01-01T00:00:00Z
    let a = Almanac::utc(1_704_067_200);
    assert_eq!(a.get(&registry, "easter").unwrap().to_string(), "2024-05-05");
    assert_eq!(a.get(&registry, "good_friday").unwrap().to_string(), "2024-05-03");
}

#[test]
fn concurrent_queries() {
    let registry = host_registry();
    let _service = EasterService::new(Arc::clone(&registry), EasterAlmanac::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                // Mid-January of 2020 + i.
                let ts = 1_579_046_400 + i * 366 * 86_400;
                let almanac = Almanac::utc(ts);
                let first = almanac.get(&registry, "easter").unwrap();
                let second = almanac.get(&registry, "easter").unwrap();
                assert_eq!(first, second);
                first.raw()
            })
        })
        .collect();
    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.len(), 8);
}

#[test]
fn global_registry_is_shared() {
    let a = AlmanacRegistry::global();
    let b = AlmanacRegistry::global();
    assert!(Arc::ptr_eq(&a, &b));
}
