#![allow(dead_code)]
use mockdns_domain::{MxRecord, NsRecord, SrvRecord, Zone, ZoneFailure};

pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self {
            zone: Zone::default(),
        }
    }

    pub fn a(mut self, addr: &str) -> Self {
        self.zone.a.push(addr.to_string());
        self
    }

    pub fn aaaa(mut self, addr: &str) -> Self {
        self.zone.aaaa.push(addr.to_string());
        self
    }

    pub fn txt(mut self, text: &str) -> Self {
        self.zone.txt.push(text.to_string());
        self
    }

    pub fn ptr(mut self, host: &str) -> Self {
        self.zone.ptr.push(host.to_string());
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.zone.cname = Some(target.to_string());
        self
    }

    pub fn mx(mut self, host: &str, pref: u16) -> Self {
        self.zone.mx.push(MxRecord::new(host, pref));
        self
    }

    pub fn ns(mut self, host: &str) -> Self {
        self.zone.ns.push(NsRecord::new(host));
        self
    }

    pub fn srv(mut self, target: &str, port: u16) -> Self {
        self.zone.srv.push(SrvRecord::new(target, port, 0, 0));
        self
    }

    pub fn error(mut self, failure: ZoneFailure) -> Self {
        self.zone.error = Some(failure);
        self
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}

impl Default for ZoneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
