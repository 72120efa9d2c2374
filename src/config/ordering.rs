//! Display ordering for hosts and operations
//!
//! Sorting compares names byte-wise and is case-sensitive, unlike lookup.
//! Both sorts are stable.

use crate::config::{HostConfig, Operation};

/// Sort hosts by name
pub fn sort_hosts_by_name(hosts: &mut [HostConfig]) {
    hosts.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Sort operations by name
pub fn sort_operations_by_name(operations: &mut [Operation]) {
    operations.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(name: &str, port: i64) -> HostConfig {
        HostConfig {
            name: name.to_string(),
            port,
            ..Default::default()
        }
    }

    #[test]
    fn test_hosts_sorted_case_sensitive() {
        let mut hosts = vec![host("b", 0), host("A", 0), host("a", 0)];
        sort_hosts_by_name(&mut hosts);

        let names: Vec<&str> = hosts.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["A", "a", "b"]);
    }

    #[test]
    fn test_hosts_sort_is_stable() {
        let mut hosts = vec![host("b", 1), host("a", 0), host("b", 2)];
        sort_hosts_by_name(&mut hosts);

        let ports: Vec<i64> = hosts.iter().map(|h| h.port).collect();
        assert_eq!(ports, vec![0, 1, 2]);
    }

    #[test]
    fn test_operations_sorted_and_stable() {
        let op = |name: &str, cmd: &str| Operation {
            name: name.to_string(),
            shell_command: cmd.to_string(),
            is_streaming: false,
        };
        let mut ops = vec![op("tail", "1"), op("Deploy", "x"), op("tail", "2"), op("deploy", "y")];
        sort_operations_by_name(&mut ops);

        let order: Vec<(&str, &str)> = ops
            .iter()
            .map(|o| (o.name.as_str(), o.shell_command.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("Deploy", "x"), ("deploy", "y"), ("tail", "1"), ("tail", "2")]
        );
    }

    #[test]
    fn test_sort_empty() {
        let mut hosts: Vec<HostConfig> = Vec::new();
        sort_hosts_by_name(&mut hosts);
        assert!(hosts.is_empty());
    }
}
