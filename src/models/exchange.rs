use std::fmt;

/// Payload layout an exchange's adapter expects. Forks share the layout of the
/// exchange they were forked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeKind {
    UniswapV2,
    UniswapV3,
    CurveV1,
    ZeroXV4,
}

const EXCHANGE_NAME_ALIASES: [(&str, ExchangeKind); 8] = [
    ("sushiswap", ExchangeKind::UniswapV2),
    ("pancakeswapv2", ExchangeKind::UniswapV2),
    ("shibaswap", ExchangeKind::UniswapV2),
    ("sushiswapv3", ExchangeKind::UniswapV3),
    ("pancakeswapv3", ExchangeKind::UniswapV3),
    ("curve", ExchangeKind::CurveV1),
    ("zerox", ExchangeKind::ZeroXV4),
    ("0x", ExchangeKind::ZeroXV4),
];

impl ExchangeKind {
    pub const ALL: [ExchangeKind; 4] = [
        ExchangeKind::UniswapV2,
        ExchangeKind::UniswapV3,
        ExchangeKind::CurveV1,
        ExchangeKind::ZeroXV4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeKind::UniswapV2 => "uniswapv2",
            ExchangeKind::UniswapV3 => "uniswapv3",
            ExchangeKind::CurveV1 => "curvev1",
            ExchangeKind::ZeroXV4 => "zeroxv4",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize_exchange_name(name);
        ExchangeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .or_else(|| {
                EXCHANGE_NAME_ALIASES
                    .iter()
                    .find_map(|(alias, kind)| (*alias == normalized).then_some(*kind))
            })
    }
}

impl fmt::Display for ExchangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exchange names arrive in whatever casing the optimizer uses ("UniswapV2",
/// "uniswap_v2", "Uniswap-V2"); lookups go through this form.
pub fn normalize_exchange_name(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .replace(['-', ' ', '_'], "")
}
