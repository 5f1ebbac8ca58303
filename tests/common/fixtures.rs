//! Static CSV corpora and column names used across harnesses.
//!
//! Column names match the default `[columns]` configuration, which follows
//! the layout of the public "cybersecurity attacks" CSV dataset.

use std::path::{Path, PathBuf};

pub const COL_TIMESTAMP: &str = "Timestamp";
pub const COL_SOURCE_IP: &str = "Source IP Address";
pub const COL_DESTINATION_IP: &str = "Destination IP Address";
pub const COL_DESTINATION_PORT: &str = "Destination Port";
pub const COL_PACKET_LENGTH: &str = "Packet Length";
pub const COL_PAYLOAD: &str = "Payload Data";
pub const COL_ANOMALY_SCORE: &str = "Anomaly Scores";
pub const COL_ATTACK_TYPE: &str = "Attack Type";
pub const COL_ACTION_TAKEN: &str = "Action Taken";
pub const COL_SEVERITY: &str = "Severity Level";
pub const COL_USER_INFO: &str = "User Information";
pub const COL_LOCATION: &str = "Geo-location Data";

/// Header row of the dataset-shaped corpus below.
pub const CSV_HEADER: &str = "Timestamp,Source IP Address,Destination IP Address,Source Port,Destination Port,Protocol,Packet Length,Payload Data,Anomaly Scores,Attack Type,Action Taken,Severity Level,User Information,Device Information,Geo-location Data,Log Source";

/// Representative rows in the dataset's shape.
pub const CSV_ATTACKS: &[&str] = &[
    r#"2023-05-30 06:33:58,103.216.15.12,84.9.164.252,31225,17616,ICMP,503,Qui natus odio asperiores nam,28.67,Malware,Logged,Low,Reyansh Dugal,Mozilla/5.0 (compatible; MSIE 8.0),"Jamshedpur, Sikkim",Server"#,
    r#"2020-08-26 07:08:30,78.199.217.198,66.191.137.154,17245,48166,ICMP,1174,Aperiam quos modi officiis veritatis,51.5,Malware,Blocked,Low,Sumer Rana,Mozilla/5.0 (compatible; MSIE 8.0),"Bilaspur, Nagaland",Firewall"#,
    r#"2022-11-13 08:23:25,63.79.210.48,198.219.82.17,16811,53600,UDP,306,Unusual authentication flow detected,87.42,DDoS,Ignored,Low,Himmat Karpe,Mozilla/5.0 (Windows NT 6.2),"Bokaro, Rajasthan",Firewall"#,
    r#"2023-07-02 10:38:46,163.42.196.10,101.228.192.255,20018,32534,UDP,385,Repellendus access request,15.79,Malware,Blocked,Medium,Fateh Kibe,Mozilla/5.0 (Macintosh),"Jaunpur, Rajasthan",Firewall"#,
    r#"2023-07-16 13:11:07,71.166.185.76,189.243.174.238,6131,26646,TCP,1462,Quibusdam login attempt,0,Intrusion,Logged,Low,Dhanush Chad,Mozilla/5.0 (Windows NT 6.0),"Mumbai, Maharashtra",Firewall"#,
];

/// Write `rows` under [`CSV_HEADER`] to `dir/name`, returning the path.
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut text = String::from(CSV_HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    std::fs::write(&path, text).expect("write CSV fixture");
    path
}

/// `n` dataset-shaped rows cycling through [`CSV_ATTACKS`].
pub fn csv_rows(n: usize) -> Vec<&'static str> {
    CSV_ATTACKS.iter().copied().cycle().take(n).collect()
}
