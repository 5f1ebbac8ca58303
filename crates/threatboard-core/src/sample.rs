//! Built-in sample dataset, served whenever no usable CSV input is configured.

use crate::types::{
    Behavior, Dataset, GeoLocation, LoginAttemptRecord, LoginStatus, Severity, ThreatRecord,
    TrafficRecord, TrafficStatus,
};

/// The fixed demo dataset: 5 threats, 6 traffic flows, 5 login attempts.
pub fn sample_dataset() -> Dataset {
    Dataset {
        threats: sample_threats(),
        traffic: sample_traffic(),
        login_attempts: sample_login_attempts(),
    }
}

// (ip, category, severity, last seen, count, description, source, (lat, lng, country, city))
type ThreatTemplate = (
    &'static str,
    &'static str,
    Severity,
    &'static str,
    u64,
    &'static str,
    &'static str,
    (f64, f64, &'static str, &'static str),
);

const THREATS: &[ThreatTemplate] = &[
    (
        "192.168.1.100",
        "Malicious",
        Severity::High,
        "2025-04-26T10:15:00",
        42,
        "This IP address has been observed attempting to exploit known vulnerabilities in web applications. Multiple failed login attempts and SQL injection attacks were detected.",
        "Internal Threat Intelligence",
        (37.7749, -122.4194, "United States", "San Francisco"),
    ),
    (
        "10.0.0.15",
        "Scanning",
        Severity::Medium,
        "2025-04-25T14:30:00",
        18,
        "This IP has been detected performing port scanning activities across the network. The scanning pattern suggests reconnaissance for potential vulnerabilities.",
        "Network IDS",
        (51.5074, -0.1278, "United Kingdom", "London"),
    ),
    (
        "172.16.0.5",
        "Suspicious",
        Severity::Low,
        "2025-04-24T09:45:00",
        7,
        "This IP has exhibited unusual traffic patterns that deviate from baseline behavior. While not clearly malicious, the activity warrants monitoring.",
        "Behavioral Analysis",
        (35.6762, 139.6503, "Japan", "Tokyo"),
    ),
    (
        "203.0.113.42",
        "Malicious",
        Severity::High,
        "2025-04-26T08:30:00",
        31,
        "This IP has been identified as part of a botnet network. It has been observed participating in distributed denial-of-service (DDoS) attacks.",
        "Threat Intelligence Feed",
        (55.7558, 37.6173, "Russia", "Moscow"),
    ),
    (
        "198.51.100.23",
        "Suspicious",
        Severity::Medium,
        "2025-04-25T16:45:00",
        15,
        "This IP has been observed attempting to access sensitive resources without proper authorization. Multiple authentication failures recorded.",
        "Security Information and Event Management (SIEM)",
        (40.7128, -74.0060, "United States", "New York"),
    ),
];

// (timestamp, source, destination, protocol, port, bytes, packets, duration, status)
type TrafficTemplate = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    u64,
    u64,
    f64,
    TrafficStatus,
);

const TRAFFIC: &[TrafficTemplate] = &[
    (
        "2025-04-26T10:15:00",
        "192.168.1.100",
        "10.0.0.5",
        "TCP",
        443,
        1245,
        8,
        2.5,
        TrafficStatus::Blocked,
    ),
    (
        "2025-04-26T10:12:00",
        "172.16.0.5",
        "10.0.0.10",
        "UDP",
        53,
        512,
        4,
        1.2,
        TrafficStatus::Flagged,
    ),
    (
        "2025-04-26T10:10:00",
        "10.0.0.15",
        "10.0.0.1",
        "TCP",
        80,
        8192,
        12,
        3.7,
        TrafficStatus::Allowed,
    ),
    (
        "2025-04-26T10:05:00",
        "192.168.1.5",
        "10.0.0.2",
        "TCP",
        22,
        4096,
        16,
        5.1,
        TrafficStatus::Allowed,
    ),
    (
        "2025-04-26T10:01:00",
        "192.168.1.100",
        "10.0.0.5",
        "TCP",
        3389,
        2048,
        6,
        1.8,
        TrafficStatus::Blocked,
    ),
    (
        "2025-04-26T09:58:00",
        "10.0.0.15",
        "172.16.0.1",
        "UDP",
        123,
        256,
        2,
        0.5,
        TrafficStatus::Allowed,
    ),
];

// (timestamp, user, ip, device, location, status, behavior, score, description)
type LoginTemplate = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    LoginStatus,
    Behavior,
    f64,
    &'static str,
);

const LOGIN_ATTEMPTS: &[LoginTemplate] = &[
    (
        "2025-04-26T10:14:00",
        "admin",
        "192.168.1.100",
        "Windows 10 / Chrome 123",
        "San Francisco, United States",
        LoginStatus::Failed,
        Behavior::AuthenticationAttempt,
        82.5,
        "Repeated authentication failures against the admin account from a known exploit source.",
    ),
    (
        "2025-04-26T09:40:00",
        "jsmith",
        "10.0.0.42",
        "macOS 14 / Safari 17",
        "London, United Kingdom",
        LoginStatus::Successful,
        Behavior::SuspiciousLogin,
        24.0,
        "Login outside normal working hours from a recognised device.",
    ),
    (
        "2025-04-26T08:31:00",
        "svc-backup",
        "203.0.113.42",
        "Linux / curl 8.5",
        "Moscow, Russia",
        LoginStatus::Blocked,
        Behavior::HighlySuspicious,
        91.3,
        "Service account login attempted from a botnet-associated address.",
    ),
    (
        "2025-04-25T16:47:00",
        "mlee",
        "198.51.100.23",
        "Windows 11 / Edge 122",
        "New York, United States",
        LoginStatus::Failed,
        Behavior::Unusual,
        55.8,
        "Unusual access pattern: sensitive resources requested immediately after login.",
    ),
    (
        "2025-04-24T09:50:00",
        "guest",
        "172.16.0.5",
        "Android 14 / Chrome Mobile",
        "Tokyo, Japan",
        LoginStatus::Failed,
        Behavior::SuspiciousLogin,
        38.1,
        "Guest account login attempt from a host flagged by behavioral analysis.",
    ),
];

pub fn sample_threats() -> Vec<ThreatRecord> {
    THREATS
        .iter()
        .enumerate()
        .map(
            |(i, &(ip, category, severity, last_seen, count, description, source, geo))| {
                let (lat, lng, country, city) = geo;
                ThreatRecord {
                    id: (i + 1).to_string(),
                    ip_address: ip.to_string(),
                    category: category.to_string(),
                    severity,
                    last_seen: last_seen.to_string(),
                    count,
                    description: description.to_string(),
                    source: source.to_string(),
                    location: GeoLocation {
                        lat,
                        lng,
                        country: country.to_string(),
                        city: city.to_string(),
                    },
                }
            },
        )
        .collect()
}

pub fn sample_traffic() -> Vec<TrafficRecord> {
    TRAFFIC
        .iter()
        .enumerate()
        .map(
            |(i, &(timestamp, src, dst, protocol, port, bytes, packets, duration, status))| {
                TrafficRecord {
                    id: (i + 1).to_string(),
                    timestamp: timestamp.to_string(),
                    source_ip: src.to_string(),
                    destination_ip: dst.to_string(),
                    protocol: protocol.to_string(),
                    port,
                    bytes_transferred: bytes,
                    packets_transferred: packets,
                    duration,
                    status,
                }
            },
        )
        .collect()
}

pub fn sample_login_attempts() -> Vec<LoginAttemptRecord> {
    LOGIN_ATTEMPTS
        .iter()
        .enumerate()
        .map(
            |(i, &(timestamp, user, ip, device, location, status, behavior, score, description))| {
                LoginAttemptRecord {
                    id: (i + 1).to_string(),
                    timestamp: timestamp.to_string(),
                    username: user.to_string(),
                    ip_address: ip.to_string(),
                    device_info: device.to_string(),
                    location: location.to_string(),
                    status,
                    behavior,
                    anomaly_score: score,
                    description: description.to_string(),
                }
            },
        )
        .collect()
}
