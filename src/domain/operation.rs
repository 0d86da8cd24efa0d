use std::fmt;
use std::str::FromStr;

/// One Clickatell HTTP API capability and the server path it lives at.
///
/// The set is closed: every name a caller may dispatch by is listed here, so an
/// unknown name is rejected before anything goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Auth,
    DelMsg,
    GetBalance,
    GetMsgCharge,
    Ping,
    SendMsg,
    TokenPay,
    QueryMsg,
    StartBatch,
    SendItem,
    QuickSend,
    EndBatch,
    RouteCoverage,
    IndPush,
    SiPush,
}

impl Operation {
    /// Every operation, in endpoint table order.
    pub const ALL: [Operation; 15] = [
        Self::Auth,
        Self::DelMsg,
        Self::GetBalance,
        Self::GetMsgCharge,
        Self::Ping,
        Self::SendMsg,
        Self::TokenPay,
        Self::QueryMsg,
        Self::StartBatch,
        Self::SendItem,
        Self::QuickSend,
        Self::EndBatch,
        Self::RouteCoverage,
        Self::IndPush,
        Self::SiPush,
    ];

    /// Symbolic name as used by the Clickatell documentation (`sendmsg`, `routeCoverage`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::DelMsg => "delmsg",
            Self::GetBalance => "getbalance",
            Self::GetMsgCharge => "getmsgcharge",
            Self::Ping => "ping",
            Self::SendMsg => "sendmsg",
            Self::TokenPay => "token_pay",
            Self::QueryMsg => "querymsg",
            Self::StartBatch => "startbatch",
            Self::SendItem => "senditem",
            Self::QuickSend => "quicksend",
            Self::EndBatch => "endbatch",
            Self::RouteCoverage => "routeCoverage",
            Self::IndPush => "ind_push",
            Self::SiPush => "si_push",
        }
    }

    /// Server-relative path, without a leading slash.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Auth => "http/auth",
            Self::DelMsg => "http/delmsg",
            Self::GetBalance => "http/getbalance",
            Self::GetMsgCharge => "http/getmsgcharge",
            Self::Ping => "http/ping",
            Self::SendMsg => "http/sendmsg",
            Self::TokenPay => "http/token_pay",
            Self::QueryMsg => "http/querymsg",
            Self::StartBatch => "http_batch/startbatch",
            Self::SendItem => "http_batch/senditem",
            Self::QuickSend => "http_batch/quicksend",
            Self::EndBatch => "http_batch/endbatch",
            Self::RouteCoverage => "utils/routeCoverage.php",
            Self::IndPush => "mms/ind_push.php",
            Self::SiPush => "mms/si_push",
        }
    }

    /// Look up an operation by its exact (case-sensitive) symbolic name.
    pub fn from_name(name: &str) -> Result<Self, UnknownOperation> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| UnknownOperation {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A symbolic name that is not part of the endpoint table.
pub struct UnknownOperation {
    pub name: String,
}

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {}", self.name)
    }
}

impl std::error::Error for UnknownOperation {}
