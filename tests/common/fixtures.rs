//! Common test fixtures and constants.

use snmp_decode::{Oid, oid};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}

// =============================================================================
// Interface counters
// =============================================================================

/// ifInOctets.1: 1.3.6.1.2.1.2.2.1.10.1
pub fn if_in_octets_1() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 10, 1)
}

/// ifHCInOctets.1: 1.3.6.1.2.1.31.1.1.1.6.1
pub fn if_hc_in_octets_1() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6, 1)
}

/// Enterprise OID with multi-byte sub-identifiers (net-snmp, 8072)
pub fn net_snmp_enterprise() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 8072, 3, 2, 10)
}

// =============================================================================
// Test OIDs
// =============================================================================

/// Nonexistent OID for testing NoSuchObject/NoSuchInstance
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 99, 99, 99, 0)
}

/// Read-only community used in fixtures
pub const COMMUNITY_RO: &[u8] = b"public";
