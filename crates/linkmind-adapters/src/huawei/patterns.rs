//! Field patterns for Huawei RTN display output.

field_pattern!(RE_LINK_ID, r"\+\+\+\s+([A-Z0-9_]+)");

field_pattern!(
    RE_LICENSE_CAPACITY,
    r"Current License Capacity\(Mbps\)\s*:\s*(\d+)"
);

field_pattern!(
    RE_THROUGHPUT,
    r"Air-interface Throughput\(Mbps\)\s*:\s*([\d.]+)"
);

field_pattern!(RE_BANDWIDTH, r"Channel Bandwidth\(MHz\)\s*:\s*(\d+)");

field_pattern!(RE_ADMIN_STATUS, r"Port Admin Status\s*:\s*([A-Za-z]+)");
