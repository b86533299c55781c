//! Counter source implementation
//!
//! Reads cumulative interface byte counters through the `sysinfo` network
//! list and resolves which interface a run should monitor.

use log::{debug, trace};
use sysinfo::Networks;

use crate::models::InterfaceCounters;
use crate::sampler::MonitorError;

/// Read access to cumulative interface traffic counters.
pub trait CounterSource {
    /// Returns the current cumulative counters for `interface`.
    fn read(&mut self, interface: &str) -> Result<InterfaceCounters, MonitorError>;

    /// Lists the interface names known to the source, in source order.
    fn enumerate(&mut self) -> Vec<String>;
}

/// Counter source backed by `sysinfo`'s system network interface list.
#[derive(Debug)]
pub struct SystemCounterSource {
    networks: Networks,
}

impl Default for SystemCounterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCounterSource {
    /// Creates a counter source with a freshly refreshed interface list.
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl CounterSource for SystemCounterSource {
    fn read(&mut self, interface: &str) -> Result<InterfaceCounters, MonitorError> {
        self.networks.refresh(false);

        for (name, network) in &self.networks {
            if name.as_str() == interface {
                return Ok(InterfaceCounters {
                    rx_bytes: network.total_received(),
                    tx_bytes: network.total_transmitted(),
                });
            }
        }

        Err(MonitorError::InterfaceNotFound {
            interface: interface.to_string(),
        })
    }

    fn enumerate(&mut self) -> Vec<String> {
        self.networks.refresh(true);

        let mut names = Vec::new();
        for (name, _) in &self.networks {
            names.push(name.to_string());
        }
        names
    }
}

fn is_loopback(name: &str) -> bool {
    name == "lo" || name == "lo0" || name.eq_ignore_ascii_case("loopback")
}

/// Resolves the interface a run should monitor.
///
/// An explicitly requested interface must appear in the source's enumeration.
/// Without a request, the first non-loopback interface the source returns is
/// selected.
pub fn resolve_interface<C: CounterSource>(
    source: &mut C,
    requested: Option<&str>,
) -> Result<String, MonitorError> {
    let names = source.enumerate();
    trace!("enumerated {} interfaces: {names:?}", names.len());

    match requested {
        Some(interface) => {
            if names.iter().any(|name| name == interface) {
                Ok(interface.to_string())
            } else {
                Err(MonitorError::InterfaceNotFound {
                    interface: interface.to_string(),
                })
            }
        }
        None => names
            .into_iter()
            .find(|name| !is_loopback(name))
            .inspect(|name| debug!("defaulting to interface '{name}'"))
            .ok_or(MonitorError::NoInterfaceAvailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeCounterSource {
        names: Vec<String>,
    }

    impl CounterSource for FakeCounterSource {
        fn read(&mut self, interface: &str) -> Result<InterfaceCounters, MonitorError> {
            if self.names.iter().any(|name| name == interface) {
                Ok(InterfaceCounters {
                    rx_bytes: 0,
                    tx_bytes: 0,
                })
            } else {
                Err(MonitorError::InterfaceNotFound {
                    interface: interface.to_string(),
                })
            }
        }

        fn enumerate(&mut self) -> Vec<String> {
            self.names.clone()
        }
    }

    fn source_with(names: &[&str]) -> FakeCounterSource {
        FakeCounterSource {
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn test_explicit_interface_is_used_when_present() {
        let mut source = source_with(&["lo", "eth0", "wlan0"]);

        let resolved = resolve_interface(&mut source, Some("wlan0")).unwrap();
        assert_eq!(resolved, "wlan0");
    }

    #[test]
    fn test_explicit_interface_missing_is_not_found() {
        let mut source = source_with(&["lo", "eth0"]);

        let err = resolve_interface(&mut source, Some("eth9")).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::InterfaceNotFound { interface } if interface == "eth9"
        ));
    }

    #[test]
    fn test_default_skips_loopback() {
        let mut source = source_with(&["lo", "eth0", "wlan0"]);

        let resolved = resolve_interface(&mut source, None).unwrap();
        assert_eq!(resolved, "eth0");
    }

    #[test]
    fn test_default_skips_macos_loopback() {
        let mut source = source_with(&["lo0", "en0"]);

        let resolved = resolve_interface(&mut source, None).unwrap();
        assert_eq!(resolved, "en0");
    }

    #[test]
    fn test_only_loopback_is_no_interface_available() {
        let mut source = source_with(&["lo"]);

        let err = resolve_interface(&mut source, None).unwrap_err();
        assert!(matches!(err, MonitorError::NoInterfaceAvailable));
    }

    #[test]
    fn test_empty_enumeration_is_no_interface_available() {
        let mut source = source_with(&[]);

        let err = resolve_interface(&mut source, None).unwrap_err();
        assert!(matches!(err, MonitorError::NoInterfaceAvailable));
    }

    #[test]
    fn test_loopback_detection() {
        assert!(is_loopback("lo"));
        assert!(is_loopback("lo0"));
        assert!(is_loopback("Loopback"));
        assert!(!is_loopback("eth0"));
        assert!(!is_loopback("local0"));
    }
}
