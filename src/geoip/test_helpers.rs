//! Shared test helpers: a minimal GeoLite2-City style `.mmdb` writer.
//!
//! Builds an IPv4 database with 24-bit records where each entry is a single
//! /32 host. Only the City fields the lookup reads are encoded.

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

const METADATA_MARKER: &[u8] = b"\xab\xcd\xefMaxMind.com";
const DATA_SECTION_SEPARATOR: usize = 16;

const TYPE_STRING: u8 = 2;
const TYPE_DOUBLE: u8 = 3;
const TYPE_UINT16: u8 = 5;
const TYPE_UINT32: u8 = 6;
const TYPE_MAP: u8 = 7;
const TYPE_UINT64: u8 = 9;
const TYPE_ARRAY: u8 = 11;

/// One City record keyed by a single IPv4 address.
#[derive(Debug, Clone)]
pub struct CityEntry {
    pub ip: Ipv4Addr,
    pub country: &'static str,
    pub iso_code: &'static str,
    pub city: Option<&'static str>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityEntry {
    pub fn new(ip: Ipv4Addr, country: &'static str, iso_code: &'static str) -> Self {
        Self {
            ip,
            country,
            iso_code,
            city: None,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn city(mut self, city: &'static str) -> Self {
        self.city = Some(city);
        self
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Record {
    Empty,
    Node(usize),
    Data(usize),
}

/// Data-section encoder for the handful of types the fixtures need.
#[derive(Default)]
struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    fn control(&mut self, type_num: u8, size: usize) {
        assert!(size < 29, "fixture values stay below the short size limit");
        if type_num <= 7 {
            self.buf.push((type_num << 5) | size as u8);
        } else {
            self.buf.push(size as u8);
            self.buf.push(type_num - 7);
        }
    }

    fn string(&mut self, value: &str) {
        self.control(TYPE_STRING, value.len());
        self.buf.extend_from_slice(value.as_bytes());
    }

    fn double(&mut self, value: f64) {
        self.control(TYPE_DOUBLE, 8);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn uint16(&mut self, value: u16) {
        self.control(TYPE_UINT16, 2);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn uint32(&mut self, value: u32) {
        self.control(TYPE_UINT32, 4);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn uint64(&mut self, value: u64) {
        self.control(TYPE_UINT64, 8);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn map(&mut self, entries: usize) {
        self.control(TYPE_MAP, entries);
    }

    fn array(&mut self, items: usize) {
        self.control(TYPE_ARRAY, items);
    }

    fn names(&mut self, english: &str) {
        self.string("names");
        self.map(1);
        self.string("en");
        self.string(english);
    }

    fn city_record(&mut self, entry: &CityEntry) {
        self.map(if entry.city.is_some() { 3 } else { 2 });

        self.string("country");
        self.map(2);
        self.string("iso_code");
        self.string(entry.iso_code);
        self.names(entry.country);

        self.string("location");
        self.map(2);
        self.string("latitude");
        self.double(entry.latitude);
        self.string("longitude");
        self.double(entry.longitude);

        if let Some(city) = entry.city {
            self.string("city");
            self.map(1);
            self.names(city);
        }
    }

    fn metadata(&mut self, node_count: u32) {
        self.map(9);
        self.string("binary_format_major_version");
        self.uint16(2);
        self.string("binary_format_minor_version");
        self.uint16(0);
        self.string("build_epoch");
        self.uint64(1_700_000_000);
        self.string("database_type");
        self.string("GeoLite2-City");
        self.string("description");
        self.map(0);
        self.string("ip_version");
        self.uint16(4);
        self.string("languages");
        self.array(1);
        self.string("en");
        self.string("node_count");
        self.uint32(node_count);
        self.string("record_size");
        self.uint16(24);
    }
}

/// Encodes `entries` as an IPv4 City database.
pub fn build_city_db(entries: &[CityEntry]) -> Vec<u8> {
    let mut data = Encoder::default();
    let mut nodes: Vec<[Record; 2]> = vec![[Record::Empty, Record::Empty]];

    for entry in entries {
        let offset = data.buf.len();
        data.city_record(entry);

        let bits = u32::from(entry.ip);
        let mut node = 0;
        for depth in 0..32 {
            let bit = ((bits >> (31 - depth)) & 1) as usize;
            if depth == 31 {
                nodes[node][bit] = Record::Data(offset);
                break;
            }
            node = match nodes[node][bit] {
                Record::Node(next) => next,
                _ => {
                    nodes.push([Record::Empty, Record::Empty]);
                    let next = nodes.len() - 1;
                    nodes[node][bit] = Record::Node(next);
                    next
                }
            };
        }
    }

    let node_count = nodes.len();
    let mut db = Vec::new();
    for node in &nodes {
        for record in node {
            let value = match *record {
                Record::Empty => node_count,
                Record::Node(next) => next,
                Record::Data(offset) => node_count + DATA_SECTION_SEPARATOR + offset,
            };
            db.extend_from_slice(&(value as u32).to_be_bytes()[1..]);
        }
    }
    db.extend_from_slice(&[0u8; DATA_SECTION_SEPARATOR]);
    db.extend_from_slice(&data.buf);

    let mut metadata = Encoder::default();
    metadata.metadata(node_count as u32);
    db.extend_from_slice(METADATA_MARKER);
    db.extend_from_slice(&metadata.buf);
    db
}

/// Writes the database for `entries` to `dir/GeoLite2-City.mmdb`.
pub fn write_city_db(dir: &Path, entries: &[CityEntry]) -> PathBuf {
    let path = dir.join("GeoLite2-City.mmdb");
    std::fs::write(&path, build_city_db(entries)).unwrap();
    path
}
