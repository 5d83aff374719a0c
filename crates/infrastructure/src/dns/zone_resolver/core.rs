use super::ZoneResolver;
use mockdns_domain::{LookupError, Zone};
use tracing::{debug, trace};

/// Outcome of [`ZoneResolver::resolve_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// CNAME of the queried name itself, reported even when chasing is off.
    pub alias: Option<&'a str>,

    /// Terminal zone of the chain, or the queried zone when chasing is off.
    pub zone: &'a Zone,
}

impl ZoneResolver {
    /// Finds the zone a record lookup for `name` is answered from.
    ///
    /// Unless CNAME chasing is disabled, alias targets are followed until a
    /// zone without a CNAME is reached. A missing hop fails with `NotFound`
    /// for that hop's target; a stored zone error anywhere on the chain is
    /// returned as is and takes precedence over the zone's CNAME.
    pub fn resolve_target(&self, name: &str) -> Result<Resolution<'_>, LookupError> {
        let mut zone = self.direct_zone(name)?;
        let alias = zone.cname_target();

        if self.skip_cname {
            return Ok(Resolution { alias, zone });
        }

        let mut hops = 0;
        while let Some(target) = zone.cname_target() {
            if hops == self.max_cname_hops {
                debug!(
                    name = %name,
                    limit = self.max_cname_hops,
                    "CNAME chain too long"
                );
                return Err(LookupError::AliasChainTooLong {
                    name: name.to_string(),
                    limit: self.max_cname_hops,
                });
            }
            hops += 1;

            trace!(name = %name, target = %target, hop = hops, "Following CNAME");
            zone = self.direct_zone(target)?;
        }

        Ok(Resolution { alias, zone })
    }

    /// Zone stored under `name` without following aliases.
    pub(crate) fn direct_zone(&self, name: &str) -> Result<&Zone, LookupError> {
        let zone = self
            .zones
            .get(name)
            .ok_or_else(|| LookupError::not_found(name))?;

        match &zone.error {
            Some(failure) => Err(LookupError::Zone(failure.clone())),
            None => Ok(zone),
        }
    }

    pub(crate) fn lookup_a(&self, host: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.resolve_target(host)?.zone.a.clone())
    }

    pub(crate) fn lookup_aaaa(&self, host: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.resolve_target(host)?.zone.aaaa.clone())
    }
}
