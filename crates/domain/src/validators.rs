/// Bounds on the length of a queryable domain name. 253 is the upper limit
/// of a name in a DNS packet.
pub const MIN_NAME_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 253;

/// Longest TLD currently in the root zone is 18 characters
/// (`.northwesternmutual`), not counting the `xn--` prefix of i18n TLDs.
const MAX_TLD_LEN: usize = 18;

/// Checks that `name` is (roughly) a valid hostname: dotted lowercase
/// labels over `[a-z0-9-]` ending in a plausible TLD. It does not resolve
/// anything, it only rejects input no resolver would accept. One trailing
/// dot is accepted as the FQDN form.
pub fn validate_query_name(name: &str) -> Result<(), String> {
    if name.len() < MIN_NAME_LEN {
        return Err(format!("domain name must be at least {MIN_NAME_LEN} characters"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("domain name cannot be longer than {MAX_NAME_LEN} characters"));
    }

    let name = name.strip_suffix('.').unwrap_or(name);

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return Err("domain name must contain at least two labels".to_string());
    }

    for label in &labels {
        if label.is_empty() {
            return Err("domain name cannot contain empty labels".to_string());
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(format!("invalid characters in label {label:?}"));
        }
    }

    let tld = labels[labels.len() - 1];
    let tld = tld.strip_prefix("xn--").unwrap_or(tld);
    if tld.is_empty() || tld.len() > MAX_TLD_LEN {
        return Err("top-level domain is not plausible".to_string());
    }
    if !tld.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return Err("top-level domain is not plausible".to_string());
    }

    Ok(())
}
