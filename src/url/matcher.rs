use std::net::IpAddr;

/// Checks if a candidate host is the seed host
///
/// The seed host is trimmed of stray `/`, `.` and spaces before comparing.
///
/// # Examples
///
/// ```
/// use ripple_check::url::same_host;
///
/// assert!(same_host("a.example.com", "a.example.com"));
/// assert!(same_host("a.example.com/", "a.example.com"));
/// assert!(!same_host("a.example.com", "b.example.com"));
/// ```
pub fn same_host(seed_host: &str, candidate: &str) -> bool {
    super::trim_host(seed_host) == candidate.to_lowercase()
}

/// Checks if two distinct hosts are related as domain and subdomain
///
/// Two host names are related when:
/// 1. Either one ends with the other ("example.com" and "www.example.com")
/// 2. Compared label by label from the right, over the length of the shorter
///    name, every label except that name's leftmost one matches
///    ("a.example.com" and "b.example.com", "a.test" and "b.test")
///
/// Identical hosts are not related; use `same_host` for those. Ports are
/// ignored. IP addresses have no parent domain and are never related.
///
/// # Examples
///
/// ```
/// use ripple_check::url::is_subdomain;
///
/// assert!(is_subdomain("example.com", "www.example.com"));
/// assert!(is_subdomain("blog.example.com", "example.com"));
/// assert!(is_subdomain("a.example.com", "b.example.com"));
/// assert!(!is_subdomain("example.com", "example.org"));
/// assert!(!is_subdomain("example.com", "example.com"));
/// ```
pub fn is_subdomain(seed_host: &str, candidate: &str) -> bool {
    let seed = strip_port(&super::trim_host(seed_host)).to_string();
    let candidate = strip_port(candidate).to_lowercase();

    if seed.is_empty() || candidate.is_empty() || seed == candidate {
        return false;
    }

    if is_ip_address(&seed) || is_ip_address(&candidate) {
        return false;
    }

    if seed.ends_with(&candidate) || candidate.ends_with(&seed) {
        return true;
    }

    shares_parent(&seed, &candidate)
}

/// Compares labels right to left over the shorter name, skipping its leftmost label
fn shares_parent(a: &str, b: &str) -> bool {
    let shorter = a.split('.').count().min(b.split('.').count());

    a.rsplit('.')
        .zip(b.rsplit('.'))
        .take(shorter - 1)
        .all(|(x, y)| x == y)
}

fn is_ip_address(host: &str) -> bool {
    host.starts_with('[') || host.parse::<IpAddr>().is_ok()
}

fn strip_port(host: &str) -> &str {
    // IPv6 literals keep their colons inside brackets
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    host.split(':').next().unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_host_exact() {
        assert!(same_host("example.com", "example.com"));
        assert!(same_host("127.0.0.1:8080", "127.0.0.1:8080"));
    }

    #[test]
    fn test_same_host_trims_seed() {
        assert!(same_host(" example.com. ", "example.com"));
        assert!(same_host("example.com/", "example.com"));
    }

    #[test]
    fn test_same_host_different_port() {
        assert!(!same_host("127.0.0.1:8080", "127.0.0.1:9090"));
    }

    #[test]
    fn test_same_host_no_match() {
        assert!(!same_host("example.com", "www.example.com"));
        assert!(!same_host("example.com", "other.com"));
    }

    #[test]
    fn test_subdomain_of_seed() {
        assert!(is_subdomain("example.com", "www.example.com"));
        assert!(is_subdomain("example.com", "api.v2.example.com"));
    }

    #[test]
    fn test_seed_is_subdomain_of_candidate() {
        assert!(is_subdomain("www.example.com", "example.com"));
    }

    #[test]
    fn test_siblings() {
        assert!(is_subdomain("a.example.com", "b.example.com"));
        assert!(!is_subdomain("a.example.com", "b.other.com"));
    }

    #[test]
    fn test_two_label_siblings() {
        assert!(is_subdomain("a.test", "b.test"));
        assert!(is_subdomain("example.com", "other.com"));
    }

    #[test]
    fn test_plain_suffix_either_direction() {
        assert!(is_subdomain("example.com", "myexample.com"));
        assert!(is_subdomain("myexample.com", "example.com"));
    }

    #[test]
    fn test_different_label_counts_compared_over_shorter() {
        assert!(is_subdomain("www.example.com", "api.v2.example.com"));
        assert!(is_subdomain("api.v2.example.com", "www.example.com"));
        assert!(!is_subdomain("www.example.com", "api.v2.example.org"));
    }

    #[test]
    fn test_unrelated_hosts() {
        assert!(!is_subdomain("example.com", "example.org"));
        assert!(!is_subdomain("www.example.com", "www.sample.net"));
    }

    #[test]
    fn test_ip_addresses_never_related() {
        assert!(!is_subdomain("127.0.0.1", "localhost"));
        assert!(!is_subdomain("10.0.0.1", "192.168.0.1"));
        assert!(!is_subdomain("1.1.1.1", "11.1.1.1"));
        assert!(!is_subdomain("[::1]:8080", "localhost"));
    }

    #[test]
    fn test_identical_is_not_subdomain() {
        assert!(!is_subdomain("example.com", "example.com"));
    }

    #[test]
    fn test_ports_ignored_for_subdomains() {
        assert!(is_subdomain("example.com:8080", "www.example.com"));
    }

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("example.com:8080"), "example.com");
        assert_eq!(strip_port("example.com"), "example.com");
        assert_eq!(strip_port("[::1]:8080"), "[::1]");
    }
}
