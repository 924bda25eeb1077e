//! Well-known OID name hints.
//!
//! A small hardcoded table of common object names for display. This is NOT
//! MIB support: no types, no indexes, just names for OIDs that show up in
//! almost every capture.

use crate::Oid;

/// Well-known OID entries. Objects are listed without an instance suffix.
static WELL_KNOWN_OIDS: &[(&[u32], &str)] = &[
    // SNMPv2-MIB::system
    (&[1, 3, 6, 1, 2, 1, 1], "system"),
    (&[1, 3, 6, 1, 2, 1, 1, 1], "sysDescr"),
    (&[1, 3, 6, 1, 2, 1, 1, 2], "sysObjectID"),
    (&[1, 3, 6, 1, 2, 1, 1, 3], "sysUpTime"),
    (&[1, 3, 6, 1, 2, 1, 1, 4], "sysContact"),
    (&[1, 3, 6, 1, 2, 1, 1, 5], "sysName"),
    (&[1, 3, 6, 1, 2, 1, 1, 6], "sysLocation"),
    (&[1, 3, 6, 1, 2, 1, 1, 7], "sysServices"),
    // IF-MIB::interfaces
    (&[1, 3, 6, 1, 2, 1, 2], "interfaces"),
    (&[1, 3, 6, 1, 2, 1, 2, 1], "ifNumber"),
    (&[1, 3, 6, 1, 2, 1, 2, 2], "ifTable"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1], "ifEntry"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 1], "ifIndex"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 2], "ifDescr"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 3], "ifType"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 5], "ifSpeed"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 6], "ifPhysAddress"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 7], "ifAdminStatus"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 8], "ifOperStatus"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 10], "ifInOctets"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 16], "ifOutOctets"),
    // IF-MIB::ifXTable
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 1], "ifName"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6], "ifHCInOctets"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 10], "ifHCOutOctets"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 15], "ifHighSpeed"),
    // HOST-RESOURCES-MIB
    (&[1, 3, 6, 1, 2, 1, 25, 1, 1], "hrSystemUptime"),
    // SNMP-FRAMEWORK-MIB / SNMPv2-MIB counters seen in Report PDUs
    (&[1, 3, 6, 1, 6, 3, 10, 2, 1, 1], "snmpEngineID"),
    (&[1, 3, 6, 1, 6, 3, 15, 1, 1, 4], "usmStatsUnknownEngineIDs"),
];

/// Name an OID by its longest well-known prefix, keeping the rest as a
/// dotted suffix.
///
/// `1.3.6.1.2.1.2.2.1.2.3` becomes `ifDescr.3`.
pub fn describe(oid: &Oid) -> Option<String> {
    let arcs = oid.arcs();
    let (prefix, name) = WELL_KNOWN_OIDS
        .iter()
        .filter(|(pattern, _)| arcs.starts_with(pattern))
        .max_by_key(|(pattern, _)| pattern.len())?;

    let mut out = (*name).to_string();
    for arc in &arcs[prefix.len()..] {
        out.push('.');
        out.push_str(&arc.to_string());
    }
    Some(out)
}

/// Parse an OID from string, supporting both dotted notation and well-known names.
///
/// Accepts:
/// - Dotted notation: "1.3.6.1.2.1.1.1.0"
/// - Well-known names with an optional numeric suffix: "sysDescr.0", "ifTable", "ifDescr.3"
pub fn parse_oid(s: &str) -> Result<Oid, String> {
    if s.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Oid::parse(s).map_err(|e| format!("invalid OID '{}': {}", s, e));
    }

    let (name, suffix) = s.split_once('.').unwrap_or((s, ""));
    let base = WELL_KNOWN_OIDS
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(name))
        .map(|(arcs, _)| Oid::from_slice(arcs))
        .ok_or_else(|| {
            format!(
                "unknown OID name '{}'; use dotted notation (e.g., 1.3.6.1.2.1.1.1.0)",
                name
            )
        })?;

    if suffix.is_empty() {
        return Ok(base);
    }

    let rest = Oid::parse(suffix).map_err(|e| format!("invalid OID suffix in '{}': {}", s, e))?;
    Ok(Oid::new(base.arcs().iter().chain(rest.arcs()).copied()))
}
