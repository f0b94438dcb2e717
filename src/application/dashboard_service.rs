// Dashboard service - Use case for building the dashboard payload
use crate::application::error::DashboardError;
use crate::application::normalizer::{self, COUNTRY_PALETTE, DEVICE_PALETTE};
use crate::application::property_resolver::PropertyResolver;
use crate::application::report_gateway::{ReportBundle, ReportGateway};
use crate::domain::dashboard::DashboardPayload;

#[derive(Clone)]
pub struct DashboardService {
    resolver: PropertyResolver,
    gateway: ReportGateway,
}

impl DashboardService {
    pub fn new(resolver: PropertyResolver, gateway: ReportGateway) -> Self {
        Self { resolver, gateway }
    }

    /// An explicit property ID wins and skips the sheet entirely;
    /// otherwise the lookup sheet decides, optionally filtered by site name.
    pub async fn get_dashboard(
        &self,
        property_id: Option<&str>,
        site_name: Option<&str>,
    ) -> Result<DashboardPayload, DashboardError> {
        let property_id = match property_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => self
                .resolver
                .resolve(site_name)
                .await?
                .ok_or(DashboardError::PropertyNotFound)?,
        };

        tracing::debug!("building dashboard for property {property_id}");
        let bundle = self.gateway.fetch_all(&property_id).await?;
        Ok(assemble(&bundle, &property_id))
    }
}

fn assemble(bundle: &ReportBundle, property_id: &str) -> DashboardPayload {
    DashboardPayload {
        kpi: normalizer::kpi_block(&bundle.kpi),
        trend: normalizer::monthly_trend(&bundle.trend),
        daily: normalizer::daily_trend(&bundle.daily),
        device: normalizer::breakdown(&bundle.device, &DEVICE_PALETTE),
        country: normalizer::breakdown(&bundle.country, &COUNTRY_PALETTE),
        property_id: property_id.to_string(),
        degraded: false,
    }
}
