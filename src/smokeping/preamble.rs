//! Static sections of the generated Smokeping config.

use crate::config::{Config, DEFAULT_CGI_URL, DEFAULT_CONTACT, DEFAULT_FPING_BINARY, DEFAULT_OWNER};

/// Operator-specific values substituted into the preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreambleSettings {
    pub owner: String,
    pub contact: String,
    pub cgi_url: String,
    pub fping_binary: String,
}

impl Default for PreambleSettings {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
            cgi_url: DEFAULT_CGI_URL.to_string(),
            fping_binary: DEFAULT_FPING_BINARY.to_string(),
        }
    }
}

impl From<&Config> for PreambleSettings {
    fn from(config: &Config) -> Self {
        Self {
            owner: config.owner.clone(),
            contact: config.contact.clone(),
            cgi_url: config.cgi_url.clone(),
            fping_binary: config.fping_binary.clone(),
        }
    }
}

/// General, Alerts, Database, Presentation and Probes sections, followed by
/// the Targets header that the generated stanzas hang off.
pub fn render_preamble(settings: &PreambleSettings) -> String {
    format!(
        r#"*** General ***

owner     = {owner}
contact   = {contact}
mailhost  = localhost
sendmail  = /bin/false
imgcache  = /srv/smokeping/imgcache
imgurl    = imgcache
datadir   = /srv/smokeping/data
piddir    = /var/run
cgiurl    = {cgi_url}
smokemail = /etc/smokeping/smokemail
tmail     = /etc/smokeping/tmail
syslogfacility = local0

*** Alerts ***
to = root@localhost
from = root@localhost

+someloss
type = loss
# in percent
pattern = >0%,*12*,>0%,*12*,>0%
comment = loss 3 times  in a row

*** Database ***

step     = 300
pings    = 20

# consfn mrhb steps total

AVERAGE  0.5   1  1008
AVERAGE  0.5  12  4320
    MIN  0.5  12  4320
    MAX  0.5  12  4320
AVERAGE  0.5 144   720
    MAX  0.5 144   720
    MIN  0.5 144   720

*** Presentation ***

template = /etc/smokeping/basepage.html
graphborders = no

+ charts

menu = Charts
title = The most interesting destinations
++ stddev
sorter = StdDev(entries=>4)
title = Top Standard Deviation
menu = Std Deviation
format = Standard Deviation %f

++ max
sorter = Max(entries=>5)
title = Top Max Roundtrip Time
menu = by Max
format = Max Roundtrip Time %f seconds

++ loss
sorter = Loss(entries=>5)
title = Top Packet Loss
menu = Loss
format = Packets Lost %f

++ median
sorter = Median(entries=>5)
title = Top Median Roundtrip Time
menu = by Median
format = Median RTT %f seconds

+ overview

width = 600
height = 50
range = 10h

+ detail

width = 900
height = 400
unison_tolerance = 2
max_rtt = 0.800

"Last 3 Hours"    3h
"Last 30 Hours"   30h
"Last 10 Days"    10d
"Last 400 Days"   400d

*** Probes ***

+ FPing

binary = {fping_binary}

*** Targets ***

probe = FPing

menu = Top
title = Network Latency Grapher
remark = Livepeer Orchestrator Network Latency. \
         Here we learn all about our LPT network's latency.

"#,
        owner = settings.owner,
        contact = settings.contact,
        cgi_url = settings.cgi_url,
        fping_binary = settings.fping_binary,
    )
}
