//! Mock sar source for testing. Serves pre-loaded logs, plus canned sar
//! output for each supported kernel family.

use std::collections::HashMap;

use crate::error::{SarError, SarResult};
use crate::source::SarSource;

/// A mock sar source that serves pre-loaded content by path.
pub struct MockSarSource {
    files: HashMap<String, Vec<String>>,
}

impl MockSarSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Add a file from raw text.
    pub fn add_text(&mut self, path: impl Into<String>, text: &str) {
        self.add_file(path, text.lines().map(String::from).collect());
    }

    /// RHEL 7 log for 2021-03-04 at `/var/log/sa/sar04`.
    pub fn with_rhel7_sample() -> Self {
        let mut m = Self::new();
        m.add_text("/var/log/sa/sar04", &rhel7_log("web01", "03/04/2021"));
        m
    }

    /// RHEL 6 German-locale log for 2021-03-05 at `/var/log/sa/sar05`.
    pub fn with_rhel6_sample() -> Self {
        let mut m = Self::new();
        m.add_text("/var/log/sa/sar05", &rhel6_log("db02", "2021-03-05"));
        m
    }

    /// RHEL 5 log for 2021-03-04 at `/var/log/sa/sar04`.
    pub fn with_rhel5_sample() -> Self {
        let mut m = Self::new();
        m.add_text("/var/log/sa/sar04", &rhel5_log("legacy01", "03/04/21"));
        m
    }
}

impl Default for MockSarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SarSource for MockSarSource {
    fn read_lines(&self, path: &str) -> SarResult<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SarError::NotFound(path.to_string()))
    }
}

/// `sar -A` style output from a RHEL 7 host, 12-hour clock, two samples
/// per section. `date` is the header date token as sar prints it.
pub fn rhel7_log(host: &str, date: &str) -> String {
    let header = format!("Linux 3.10.0-957.el7.x86_64 ({host}) \t{date} \t_x86_64_\t(2 CPU)");
    let body = r#"
12:00:01 AM     CPU      %usr     %nice      %sys   %iowait    %steal      %irq     %soft    %guest    %gnice     %idle
12:10:01 AM     all      2.15      0.00      1.03      0.12      0.00      0.00      0.01      0.00      0.00     96.69
12:10:01 AM       0      2.20      0.00      1.10      0.10      0.00      0.00      0.02      0.00      0.00     96.58
12:10:01 AM       1      2.10      0.00      0.96      0.14      0.00      0.00      0.00      0.00      0.00     96.80
12:20:01 AM     all      3.40      0.00      1.20      0.05      0.00      0.00      0.01      0.00      0.00     95.34
12:20:01 AM       0      3.50      0.00      1.25      0.04      0.00      0.00      0.01      0.00      0.00     95.20
12:20:01 AM       1      3.30      0.00      1.15      0.06      0.00      0.00      0.01      0.00      0.00     95.48
Average:        all      2.78      0.00      1.12      0.09      0.00      0.00      0.01      0.00      0.00     96.01
Average:          0      2.85      0.00      1.18      0.07      0.00      0.00      0.02      0.00      0.00     95.89
Average:          1      2.70      0.00      1.06      0.10      0.00      0.00      0.00      0.00      0.00     96.14

12:00:01 AM    proc/s   cswch/s
12:10:01 AM      1.52   1203.44
12:20:01 AM      1.61   1298.10
Average:         1.57   1250.77

12:00:01 AM  pswpin/s pswpout/s
12:10:01 AM      0.00      0.00
12:20:01 AM      0.00      0.02
Average:         0.00      0.01

12:00:01 AM  pgpgin/s pgpgout/s   fault/s  majflt/s  pgfree/s pgscank/s pgscand/s pgsteal/s    %vmeff
12:10:01 AM      0.51     14.22    310.02      0.00    120.33      0.00      0.00      0.00      0.00
12:20:01 AM      0.40     12.80    290.55      0.00    110.21      0.00      0.00      0.00      0.00
Average:         0.46     13.51    300.29      0.00    115.27      0.00      0.00      0.00      0.00

12:00:01 AM       tps      rtps      wtps   bread/s   bwrtn/s
12:10:01 AM      3.05      0.10      2.95      1.02     28.44
12:20:01 AM      2.80      0.05      2.75      0.80     25.60
Average:         2.93      0.08      2.85      0.91     27.02

12:00:01 AM kbmemfree kbmemused  %memused kbbuffers  kbcached  kbcommit   %commit  kbactive   kbinact   kbdirty
12:10:01 AM   6050220   1960444     24.47      2108   1207464   2544588     25.41    986220    604032        44
12:20:01 AM   6041100   1969564     24.59      2108   1209020   2551200     25.48    990412    605120        12
Average:      6045660   1965004     24.53      2108   1208242   2547894     25.44    988316    604576        28

12:00:01 AM kbswpfree kbswpused  %swpused  kbswpcad   %swpcad
12:10:01 AM   2097148         0      0.00         0      0.00
12:20:01 AM   2096124      1024      0.05         0      0.00
Average:      2096636       512      0.02         0      0.00

12:00:01 AM dentunusd   file-nr  inode-nr    pty-nr
12:10:01 AM     51234      2592     41872         2
12:20:01 AM     51310      2624     41901         2
Average:        51272      2608     41887         2

12:00:01 AM   runq-sz  plist-sz   ldavg-1   ldavg-5  ldavg-15   blocked
12:10:01 AM         1       212      0.08      0.05      0.05         0
12:20:01 AM         0       215      0.12      0.07      0.05         0
Average:            1       214      0.10      0.06      0.05         0

12:00:01 AM     IFACE   rxpck/s   txpck/s    rxkB/s    txkB/s   rxcmp/s   txcmp/s  rxmcst/s
12:10:01 AM      eth0     12.30     10.10      1.20      1.80      0.00      0.00      0.00
12:10:01 AM        lo      0.50      0.50      0.03      0.03      0.00      0.00      0.00
12:20:01 AM      eth0     11.90      9.80      1.10      1.70      0.00      0.00      0.00
12:20:01 AM        lo      0.40      0.40      0.02      0.02      0.00      0.00      0.00
Average:         eth0     12.10      9.95      1.15      1.75      0.00      0.00      0.00
Average:           lo      0.45      0.45      0.03      0.03      0.00      0.00      0.00

12:00:01 AM    totsck    tcpsck    udpsck    rawsck   ip-frag    tcp-tw
12:10:01 AM       310        24         6         0         0        10
12:20:01 AM       312        25         6         0         0        12
Average:          311        25         6         0         0        11
"#;
    format!("{header}\n{body}")
}

/// RHEL 6 output in a German locale: 24-hour clock, decimal commas and
/// `Durchschn.:` sentinels, with a restart between samples.
pub fn rhel6_log(host: &str, date: &str) -> String {
    let header = format!("Linux 2.6.32-754.el6.x86_64 ({host}) \t{date} \t_x86_64_\t(8 CPU)");
    let body = r#"
00:00:01        CPU     %user     %nice   %system   %iowait    %steal     %idle
00:10:01        all      4,10      0,00      2,05      0,40      0,00     93,45
01:10:01        all      6,30      0,00      2,70      0,90      0,00     90,10
Durchschn.:     all      5,20      0,00      2,38      0,65      0,00     91,78

00:00:01       proc/s   cswch/s
00:10:01         2,10   2403,50
01:10:01         2,40   2611,20
Durchschn.:      2,25   2507,35

00:00:01     pswpin/s pswpout/s
00:10:01         0,00      0,00
01:10:01         0,10      0,30
Durchschn.:      0,05      0,15

00:00:01          tps      rtps      wtps   bread/s   bwrtn/s
00:10:01        12,50      2,00     10,50     64,00    512,00
01:10:01        14,00      3,00     11,00     80,00    560,00
Durchschn.:     13,25      2,50     10,75     72,00    536,00

00:00:01    kbmemfree kbmemused  %memused kbbuffers  kbcached  kbcommit   %commit
00:10:01     10240000  22528000     68,75    204800  12288000  16384000     40,00
01:10:01     10112000  22656000     69,14    204800  12390000  16420000     40,09
Durchschn.:  10176000  22592000     68,95    204800  12339000  16402000     40,05

00:00:01    kbswpfree kbswpused  %swpused  kbswpcad   %swpcad
00:10:01      8388604         0      0,00         0      0,00
01:10:01      8384508      4096      0,05       512     12,50
Durchschn.:   8386556      2048      0,02       256      6,25

00:00:01    dentunusd   file-nr  inode-nr    pty-nr
00:10:01       120400      4096     98012         4
01:10:01       121050      4160     98230         4
Durchschn.:    120725      4128     98121         4

00:00:01      runq-sz  plist-sz   ldavg-1   ldavg-5  ldavg-15
00:10:01            3       640      1,20      1,10      0,95
01:10:01            2       655      1,45      1,25      1,02
Durchschn.:         3       648      1,33      1,18      0,99

00:00:01       totsck    tcpsck    udpsck    rawsck   ip-frag    tcp-tw
00:10:01          820       140        12         0         0        45
00:40:01       LINUX RESTART
01:10:01          790       128        12         0         0        30
Durchschn.:       805       134        12         0         0        38
"#;
    format!("{header}\n{body}")
}

/// RHEL 5 output: standalone `proc/s` and `cswch/s` sections, swap columns
/// inside the memory section, `file-sz`/`inode-sz` naming.
pub fn rhel5_log(host: &str, date: &str) -> String {
    let header = format!("Linux 2.6.18-398.el5 ({host}) \t{date}");
    let body = r#"
12:00:01 AM       CPU     %user     %nice   %system   %iowait    %steal     %idle
12:10:01 AM       all      1.20      0.00      0.50      0.30      0.00     98.00
12:20:01 AM       all      1.40      0.00      0.60      0.20      0.00     97.80
Average:          all      1.30      0.00      0.55      0.25      0.00     97.90

12:00:01 AM    proc/s
12:10:01 AM      0.80
12:20:01 AM      0.95
Average:         0.88

12:00:01 AM   cswch/s
12:10:01 AM    420.10
12:20:01 AM    455.30
Average:       437.70

12:00:01 AM  pswpin/s pswpout/s
12:10:01 AM      0.00      0.00
12:20:01 AM      0.02      0.05
Average:         0.01      0.03

12:00:01 AM       tps      rtps      wtps   bread/s   bwrtn/s
12:10:01 AM      1.80      0.20      1.60      3.10     18.40
12:20:01 AM      2.10      0.30      1.80      4.00     21.60
Average:         1.95      0.25      1.70      3.55     20.00

12:00:01 AM kbmemfree kbmemused  %memused kbbuffers  kbcached kbswpfree kbswpused  %swpused  kbswpcad
12:10:01 AM    512000   1536000     75.00     64000    900000   2000000     96000      4.58      1200
12:20:01 AM    498000   1550000     75.68     64000    905000   1990000    106000      5.06      1300
Average:       505000   1543000     75.34     64000    902500   1995000    101000      4.82      1250

12:00:01 AM dentunusd   file-sz  inode-sz  super-sz %super-sz  dquot-sz %dquot-sz  rtsig-sz %rtsig-sz
12:10:01 AM     20311      1530     18022         0      0.00         0      0.00         0      0.00
12:20:01 AM     20420      1544     18101         0      0.00         0      0.00         0      0.00
Average:        20366      1537     18062         0      0.00         0      0.00         0      0.00

12:00:01 AM   runq-sz  plist-sz   ldavg-1   ldavg-5  ldavg-15
12:10:01 AM         0       118      0.02      0.04      0.01
12:20:01 AM         1       120      0.10      0.06      0.02
Average:            1       119      0.06      0.05      0.02

12:00:01 AM    totsck    tcpsck    udpsck    rawsck   ip-frag
12:10:01 AM        95        12         4         0         0
12:20:01 AM        97        13         4         0         0
Average:           96        13         4         0         0
"#;
    format!("{header}\n{body}")
}
