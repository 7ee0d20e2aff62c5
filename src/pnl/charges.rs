use serde::Serialize;

/// Per-trade fee schedule applied to every settled sell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeSchedule {
    /// Flat brokerage per sell trade
    pub brokerage: f64,
    /// Flat depository participant charge per sell trade
    pub dp_charge: f64,
    pub stt_rate: f64,
    pub exchange_rate: f64,
    pub sebi_rate: f64,
    /// GST on brokerage, exchange and SEBI fees
    pub gst_rate: f64,
}

impl ChargeSchedule {
    pub const STANDARD: ChargeSchedule = ChargeSchedule {
        brokerage: 20.0,
        dp_charge: 10.0,
        stt_rate: 0.001,
        exchange_rate: 0.0000375,
        sebi_rate: 0.000001,
        gst_rate: 0.18,
    };

    pub fn charges_for(&self, turnover: f64) -> ChargeBreakdown {
        let brokerage = self.brokerage;
        let stt = turnover * self.stt_rate;
        let exchange_fee = turnover * self.exchange_rate;
        let sebi_fee = turnover * self.sebi_rate;
        let gst = (brokerage + exchange_fee + sebi_fee) * self.gst_rate;
        let total = brokerage + stt + exchange_fee + sebi_fee + gst + self.dp_charge;

        ChargeBreakdown {
            turnover,
            brokerage,
            dp_charge: self.dp_charge,
            stt,
            exchange_fee,
            sebi_fee,
            gst,
            total,
        }
    }
}

impl Default for ChargeSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeBreakdown {
    pub turnover: f64,
    pub brokerage: f64,
    pub dp_charge: f64,
    pub stt: f64,
    pub exchange_fee: f64,
    pub sebi_fee: f64,
    pub gst: f64,
    pub total: f64,
}

impl ChargeBreakdown {
    /// Everything except the two flat charges.
    pub fn taxes(&self) -> f64 {
        self.total - self.brokerage - self.dp_charge
    }
}
