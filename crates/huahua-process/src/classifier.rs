//! Message-level classification rules.

use chrono::{DateTime, Utc};
use huahua_types::{Amount, Coin, RawTransaction, TransferEvent, TxType};
use serde_json::Value;
use tracing::debug;

use crate::{
    ClassifyError, DenomLabels,
    logs::{MessageLog, attr},
};

const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
const MSG_MULTI_SEND: &str = "/cosmos.bank.v1beta1.MsgMultiSend";
const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";
const MSG_UNDELEGATE: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
const MSG_BEGIN_REDELEGATE: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
const MSG_WITHDRAW_REWARD: &str = "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
const MSG_TRANSFER: &str = "/ibc.applications.transfer.v1.MsgTransfer";
const MSG_RECV_PACKET: &str = "/ibc.core.channel.v1.MsgRecvPacket";
const MSG_EXECUTE_CONTRACT: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";
const MSG_VOTE_V1BETA1: &str = "/cosmos.gov.v1beta1.MsgVote";
const MSG_VOTE_V1: &str = "/cosmos.gov.v1.MsgVote";

/// Relayer bookkeeping that shares a transaction with `MsgRecvPacket` but
/// never moves the account's funds.
const RELAYER_MESSAGES: [&str; 3] = [
    "/ibc.core.client.v1.MsgUpdateClient",
    "/ibc.core.channel.v1.MsgAcknowledgement",
    "/ibc.core.channel.v1.MsgTimeout",
];

/// Fields that name the signer of a message, in lookup order.
const SIGNER_FIELDS: [&str; 6] = [
    "from_address",
    "delegator_address",
    "sender",
    "voter",
    "signer",
    "grantee",
];

/// Shared inputs for the rules of one transaction.
struct Context<'a> {
    wallet: &'a str,
    txhash: &'a str,
    timestamp: DateTime<Utc>,
    labels: &'a DenomLabels,
}

impl Context<'_> {
    fn event(&self, tx_type: TxType) -> TransferEvent {
        TransferEvent::new(self.timestamp, tx_type, self.txhash)
    }

    fn received(&self, tx_type: TxType, coin: &Coin) -> TransferEvent {
        self.event(tx_type).with_received(self.labels.amount(coin))
    }

    fn sent(&self, tx_type: TxType, coin: &Coin) -> TransferEvent {
        self.event(tx_type).with_sent(self.labels.amount(coin))
    }
}

/// Derives the transfer events of `tx` as seen from `wallet`.
///
/// The fee is attached to the first event when `wallet` signed the
/// transaction. A signed transaction without any other effect, including a
/// failed one, yields a single [`TxType::Fee`] event.
///
/// # Errors
///
/// Returns an error if the timestamp, the message list, a message type or a
/// coin amount cannot be interpreted.
pub fn classify_tx(
    wallet: &str,
    tx: &RawTransaction,
    labels: &DenomLabels,
) -> Result<Vec<TransferEvent>, ClassifyError> {
    let timestamp = tx
        .timestamp
        .instant()
        .ok_or_else(|| ClassifyError::InvalidTimestamp(tx.timestamp.to_string()))?;
    let messages = tx
        .field("tx")
        .and_then(|body| body.pointer("/body/messages"))
        .and_then(Value::as_array)
        .ok_or_else(|| ClassifyError::MissingField("tx.body.messages".to_string()))?;

    let ctx = Context {
        wallet,
        txhash: &tx.txhash,
        timestamp,
        labels,
    };

    let mut events = Vec::new();
    if tx.is_success() {
        for (index, message) in messages.iter().enumerate() {
            let log = MessageLog::for_message(tx, index);
            classify_message(&ctx, index, message, log, &mut events)?;
        }
    }

    if signer(messages) == Some(wallet) {
        if let Some(fee) = fee(tx, labels)? {
            match events.first_mut() {
                Some(first) => first.fee = Some(fee),
                None => {
                    let comment = if tx.is_success() {
                        "fee"
                    } else {
                        "failed transaction"
                    };
                    events.push(ctx.event(TxType::Fee).with_fee(fee).with_comment(comment));
                }
            }
        }
    }

    Ok(events)
}

fn classify_message(
    ctx: &Context<'_>,
    index: usize,
    message: &Value,
    log: MessageLog<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    let type_url = message
        .get("@type")
        .and_then(Value::as_str)
        .ok_or(ClassifyError::MissingType { index })?;
    let msg = Message { type_url, value: message };

    match type_url {
        MSG_SEND => bank_send(ctx, &msg, events),
        MSG_MULTI_SEND => multi_send(ctx, &msg, events),
        MSG_DELEGATE | MSG_UNDELEGATE | MSG_BEGIN_REDELEGATE => staking(ctx, &msg, log, events),
        MSG_WITHDRAW_REWARD => {
            if msg.str("delegator_address")? == ctx.wallet {
                rewards(ctx, log, events)?;
            }
            Ok(())
        }
        MSG_TRANSFER => ibc_transfer(ctx, &msg, events),
        MSG_RECV_PACKET => ibc_receive(ctx, log, events),
        MSG_EXECUTE_CONTRACT => execute_contract(ctx, &msg, events),
        MSG_VOTE_V1BETA1 | MSG_VOTE_V1 => vote(ctx, &msg, events),
        other if RELAYER_MESSAGES.contains(&other) => Ok(()),
        other => {
            events.push(
                ctx.event(TxType::Unknown)
                    .with_comment(format!("unrecognized message {other}")),
            );
            Ok(())
        }
    }
}

/// A message with its type URL, for field errors that name the message.
struct Message<'a> {
    type_url: &'a str,
    value: &'a Value,
}

impl<'a> Message<'a> {
    fn missing(&self, field: &str) -> ClassifyError {
        let name = self.type_url.rsplit('.').next().unwrap_or(self.type_url);
        ClassifyError::MissingField(format!("{name}.{field}"))
    }

    fn get(&self, field: &str) -> Result<&'a Value, ClassifyError> {
        self.value.get(field).ok_or_else(|| self.missing(field))
    }

    fn str(&self, field: &str) -> Result<&'a str, ClassifyError> {
        self.value
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| self.missing(field))
    }

    fn coin(&self, field: &str) -> Result<Coin, ClassifyError> {
        Ok(Coin::from_value(self.get(field)?)?)
    }

    fn coins(&self, field: &str) -> Result<Vec<Coin>, ClassifyError> {
        coin_list(self.get(field)?).ok_or_else(|| self.missing(field))?
    }
}

fn coin_list(value: &Value) -> Option<Result<Vec<Coin>, ClassifyError>> {
    value.as_array().map(|items| {
        items
            .iter()
            .map(|item| Coin::from_value(item).map_err(ClassifyError::from))
            .collect()
    })
}

fn bank_send(
    ctx: &Context<'_>,
    msg: &Message<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    let from = msg.str("from_address")?;
    let to = msg.str("to_address")?;
    let coins = msg.coins("amount")?;

    if to == ctx.wallet {
        for coin in &coins {
            events.push(ctx.received(TxType::TransferIn, coin).with_counterparty(from));
        }
    }
    if from == ctx.wallet {
        for coin in &coins {
            events.push(ctx.sent(TxType::TransferOut, coin).with_counterparty(to));
        }
    }
    Ok(())
}

fn multi_send(
    ctx: &Context<'_>,
    msg: &Message<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    for (field, tx_type) in [("outputs", TxType::TransferIn), ("inputs", TxType::TransferOut)] {
        let parties = msg.get(field)?.as_array().ok_or_else(|| msg.missing(field))?;
        for party in parties {
            if party.get("address").and_then(Value::as_str) != Some(ctx.wallet) {
                continue;
            }
            let coins = party
                .get("coins")
                .and_then(coin_list)
                .ok_or_else(|| msg.missing(&format!("{field}.coins")))??;
            for coin in &coins {
                let event = match tx_type {
                    TxType::TransferIn => ctx.received(tx_type, coin),
                    _ => ctx.sent(tx_type, coin),
                };
                events.push(event.with_comment("multi-send"));
            }
        }
    }
    Ok(())
}

fn staking(
    ctx: &Context<'_>,
    msg: &Message<'_>,
    log: MessageLog<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    if msg.str("delegator_address")? != ctx.wallet {
        return Ok(());
    }
    let coin = msg.coin("amount")?;
    let amount = ctx.labels.amount(&coin);

    let (tx_type, validator, comment) = match msg.type_url {
        MSG_DELEGATE => {
            let validator = msg.str("validator_address")?;
            (TxType::Delegate, validator, format!("delegate {amount} to {validator}"))
        }
        MSG_UNDELEGATE => {
            let validator = msg.str("validator_address")?;
            (TxType::Undelegate, validator, format!("undelegate {amount} from {validator}"))
        }
        _ => {
            let source = msg.str("validator_src_address")?;
            let validator = msg.str("validator_dst_address")?;
            (
                TxType::Redelegate,
                validator,
                format!("redelegate {amount} from {source} to {validator}"),
            )
        }
    };
    events.push(
        ctx.event(tx_type)
            .with_counterparty(validator)
            .with_comment(comment),
    );
    rewards(ctx, log, events)
}

fn rewards(
    ctx: &Context<'_>,
    log: MessageLog<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    if log.is_empty() {
        debug!(txhash = ctx.txhash, "No events for reward message, rewards not reported");
        return Ok(());
    }

    let withdrawals = log.events("withdraw_rewards");
    if withdrawals.is_empty() {
        for coin in log.received_by(ctx.wallet)? {
            events.push(ctx.received(TxType::StakingReward, &coin));
        }
        return Ok(());
    }

    for attrs in &withdrawals {
        let coins = Coin::parse_list(attr(attrs, "amount").unwrap_or_default())?;
        for coin in coins.iter().filter(|coin| coin.amount > 0) {
            let mut event = ctx.received(TxType::StakingReward, coin);
            if let Some(validator) = attr(attrs, "validator") {
                event = event.with_counterparty(validator);
            }
            events.push(event);
        }
    }
    Ok(())
}

fn ibc_transfer(
    ctx: &Context<'_>,
    msg: &Message<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    if msg.str("sender")? != ctx.wallet {
        return Ok(());
    }
    let coin = msg.coin("token")?;
    let receiver = msg.str("receiver")?;
    let channel = msg.str("source_channel").unwrap_or("unknown channel");
    events.push(
        ctx.sent(TxType::IbcTransferOut, &coin)
            .with_counterparty(receiver)
            .with_comment(format!("ibc transfer via {channel}")),
    );
    Ok(())
}

fn ibc_receive(
    ctx: &Context<'_>,
    log: MessageLog<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    if log.is_empty() {
        debug!(txhash = ctx.txhash, "No events for received packet, credit not reported");
        return Ok(());
    }

    let packets = log.events("fungible_token_packet");
    let Some(packet) = packets.iter().find(|attrs| {
        attr(attrs, "receiver") == Some(ctx.wallet) && attr(attrs, "success") == Some("true")
    }) else {
        return Ok(());
    };

    // The voucher denom is only visible in the coin_received event; the
    // packet itself carries the denom as known on the sending chain.
    let mut coins = log.received_by(ctx.wallet)?;
    if coins.is_empty() {
        let amount: Coin = format!(
            "{}{}",
            attr(packet, "amount").unwrap_or_default(),
            packet_denom(attr(packet, "denom").unwrap_or_default())
        )
        .parse()?;
        coins.push(amount);
    }

    for coin in &coins {
        let mut event = ctx.received(TxType::IbcTransferIn, coin);
        if let Some(sender) = attr(packet, "sender") {
            event = event.with_counterparty(sender);
        }
        events.push(event);
    }
    Ok(())
}

/// A denom that was sent out from this chain comes back with its trace
/// prefix and unwraps to the native base denom.
fn packet_denom(denom: &str) -> &str {
    if denom.starts_with("transfer/") {
        denom.rsplit('/').next().unwrap_or(denom)
    } else {
        denom
    }
}

fn execute_contract(
    ctx: &Context<'_>,
    msg: &Message<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    if msg.str("sender")? != ctx.wallet {
        return Ok(());
    }
    let contract = msg.str("contract")?;
    let funds = match msg.value.get("funds") {
        Some(value) => coin_list(value).unwrap_or_else(|| Ok(Vec::new()))?,
        None => Vec::new(),
    };
    let action = msg
        .value
        .get("msg")
        .and_then(Value::as_object)
        .and_then(|body| body.keys().next())
        .map_or_else(|| "execute contract".to_string(), |key| format!("execute {key}"));

    if funds.is_empty() {
        events.push(
            ctx.event(TxType::ContractExecute)
                .with_counterparty(contract)
                .with_comment(action),
        );
    } else {
        for coin in &funds {
            events.push(
                ctx.sent(TxType::ContractExecute, coin)
                    .with_counterparty(contract)
                    .with_comment(action.clone()),
            );
        }
    }
    Ok(())
}

fn vote(
    ctx: &Context<'_>,
    msg: &Message<'_>,
    events: &mut Vec<TransferEvent>,
) -> Result<(), ClassifyError> {
    if msg.str("voter")? != ctx.wallet {
        return Ok(());
    }
    let proposal = scalar(msg.get("proposal_id")?);
    let option = msg.value.get("option").map_or_else(String::new, scalar);
    events.push(
        ctx.event(TxType::Vote)
            .with_comment(format!("vote {option} on proposal {proposal}")),
    );
    Ok(())
}

fn scalar(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

/// Returns the address that signed the first message.
fn signer(messages: &[Value]) -> Option<&str> {
    let first = messages.first()?;
    SIGNER_FIELDS
        .iter()
        .find_map(|field| first.get(*field).and_then(Value::as_str))
        .or_else(|| first.pointer("/inputs/0/address").and_then(Value::as_str))
}

fn fee(
    tx: &RawTransaction,
    labels: &DenomLabels,
) -> Result<Option<Amount>, ClassifyError> {
    let Some(value) = tx
        .field("tx")
        .and_then(|body| body.pointer("/auth_info/fee/amount/0"))
    else {
        return Ok(None);
    };
    let coin = Coin::from_value(value)?;
    Ok((coin.amount > 0).then(|| labels.amount(&coin)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::{Value, json};

    const WALLET: &str = "chihuahua1qqqsyqcyq5rqwzqfpg9scrgwpugpzysnhh5vwy";
    const OTHER: &str = "chihuahua1zg69v7yszg69v7yszg69v7yszg69v7ys8xdv96";
    const VALIDATOR: &str = "chihuahuavaloper1abc";
    const CONTRACT: &str = "chihuahua14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9sk0llx9";

    fn tx(code: u64, messages: Value, logs: Value) -> RawTransaction {
        serde_json::from_value(json!({
            "txhash": "ABC",
            "timestamp": "2023-03-01T10:00:00Z",
            "height": "100",
            "code": code,
            "logs": logs,
            "tx": {
                "body": {"messages": messages, "memo": ""},
                "auth_info": {"fee": {"amount": [{"denom": "uhuahua", "amount": "5000"}]}}
            }
        }))
        .unwrap()
    }

    fn send(from: &str, to: &str, amount: &str) -> Value {
        json!({
            "@type": MSG_SEND,
            "from_address": from,
            "to_address": to,
            "amount": [{"denom": "uhuahua", "amount": amount}]
        })
    }

    fn classify(tx: &RawTransaction) -> Vec<TransferEvent> {
        classify_tx(WALLET, tx, &DenomLabels::new()).unwrap()
    }

    #[test]
    fn test_incoming_send() {
        let events = classify(&tx(0, json!([send(OTHER, WALLET, "2500000")]), json!([])));

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.tx_type, TxType::TransferIn);
        let received = event.received.as_ref().unwrap();
        assert_relative_eq!(received.quantity, 2.5);
        assert_eq!(received.currency, "HUAHUA");
        assert_eq!(event.counterparty.as_deref(), Some(OTHER));
        assert!(event.fee.is_none());
        assert!(event.url.ends_with("ABC"));
    }

    #[test]
    fn test_outgoing_send_carries_fee() {
        let events = classify(&tx(0, json!([send(WALLET, OTHER, "1000000")]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::TransferOut);
        assert_relative_eq!(events[0].sent.as_ref().unwrap().quantity, 1.0);
        assert_relative_eq!(events[0].fee.as_ref().unwrap().quantity, 0.005);
    }

    #[test]
    fn test_failed_signed_tx_reports_fee_only() {
        let events = classify(&tx(5, json!([send(WALLET, OTHER, "1000000")]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::Fee);
        assert!(events[0].sent.is_none());
        assert_eq!(events[0].comment, "failed transaction");
    }

    #[test]
    fn test_failed_foreign_tx_is_silent() {
        let events = classify(&tx(5, json!([send(OTHER, WALLET, "1000000")]), json!([])));
        assert!(events.is_empty());
    }

    #[test]
    fn test_multi_send() {
        let message = json!({
            "@type": MSG_MULTI_SEND,
            "inputs": [{"address": OTHER, "coins": [{"denom": "uhuahua", "amount": "3000000"}]}],
            "outputs": [
                {"address": WALLET, "coins": [{"denom": "uhuahua", "amount": "1000000"}]},
                {"address": "chihuahua1other", "coins": [{"denom": "uhuahua", "amount": "2000000"}]}
            ]
        });
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::TransferIn);
        assert_relative_eq!(events[0].received.as_ref().unwrap().quantity, 1.0);
    }

    #[test]
    fn test_delegate_with_auto_withdrawn_rewards() {
        let message = json!({
            "@type": MSG_DELEGATE,
            "delegator_address": WALLET,
            "validator_address": VALIDATOR,
            "amount": {"denom": "uhuahua", "amount": "10000000"}
        });
        let logs = json!([{"msg_index": 0, "events": [
            {"type": "withdraw_rewards", "attributes": [
                {"key": "amount", "value": "1500000uhuahua"},
                {"key": "validator", "value": VALIDATOR}
            ]}
        ]}]);
        let events = classify(&tx(0, json!([message]), logs));

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].tx_type, TxType::Delegate);
        assert!(events[0].received.is_none() && events[0].sent.is_none());
        assert!(events[0].comment.contains(VALIDATOR));
        assert!(events[0].fee.is_some());
        assert_eq!(events[1].tx_type, TxType::StakingReward);
        assert_relative_eq!(events[1].received.as_ref().unwrap().quantity, 1.5);
        assert_eq!(events[1].counterparty.as_deref(), Some(VALIDATOR));
    }

    #[test]
    fn test_withdraw_rewards_falls_back_to_coin_received() {
        let message = json!({
            "@type": MSG_WITHDRAW_REWARD,
            "delegator_address": WALLET,
            "validator_address": VALIDATOR
        });
        let logs = json!([{"events": [
            {"type": "coin_received", "attributes": [
                {"key": "receiver", "value": WALLET},
                {"key": "amount", "value": "250000uhuahua"}
            ]}
        ]}]);
        let events = classify(&tx(0, json!([message]), logs));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::StakingReward);
        assert_relative_eq!(events[0].received.as_ref().unwrap().quantity, 0.25);
    }

    #[test]
    fn test_withdraw_rewards_from_top_level_events() {
        let message = json!({
            "@type": MSG_WITHDRAW_REWARD,
            "delegator_address": WALLET,
            "validator_address": VALIDATOR
        });
        let record = tx(0, json!([message]), json!([])).with_field(
            "events",
            json!([
                {"type": "withdraw_rewards", "attributes": [
                    {"key": "amount", "value": "500000uhuahua"},
                    {"key": "validator", "value": VALIDATOR},
                    {"key": "msg_index", "value": "0"}
                ]}
            ]),
        );
        let events = classify(&record);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::StakingReward);
        assert_relative_eq!(events[0].received.as_ref().unwrap().quantity, 0.5);
        assert_eq!(events[0].counterparty.as_deref(), Some(VALIDATOR));
    }

    #[test]
    fn test_withdraw_without_rewards_is_fee() {
        let message = json!({
            "@type": MSG_WITHDRAW_REWARD,
            "delegator_address": WALLET,
            "validator_address": VALIDATOR
        });
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::Fee);
        assert_eq!(events[0].comment, "fee");
    }

    #[test]
    fn test_redelegate() {
        let message = json!({
            "@type": MSG_BEGIN_REDELEGATE,
            "delegator_address": WALLET,
            "validator_src_address": "chihuahuavaloper1src",
            "validator_dst_address": "chihuahuavaloper1dst",
            "amount": {"denom": "uhuahua", "amount": "1"}
        });
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events[0].tx_type, TxType::Redelegate);
        assert_eq!(events[0].counterparty.as_deref(), Some("chihuahuavaloper1dst"));
    }

    #[test]
    fn test_ibc_transfer_out() {
        let message = json!({
            "@type": MSG_TRANSFER,
            "sender": WALLET,
            "receiver": "osmo1receiver",
            "source_channel": "channel-7",
            "token": {"denom": "uhuahua", "amount": "4000000"}
        });
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::IbcTransferOut);
        assert_relative_eq!(events[0].sent.as_ref().unwrap().quantity, 4.0);
        assert_eq!(events[0].comment, "ibc transfer via channel-7");
    }

    #[test]
    fn test_ibc_receive_uses_voucher_denom() {
        let denom = "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";
        let messages = json!([
            {"@type": "/ibc.core.client.v1.MsgUpdateClient", "signer": "chihuahua1relayer"},
            {"@type": MSG_RECV_PACKET, "signer": "chihuahua1relayer", "packet": {}}
        ]);
        let logs = json!([
            {"msg_index": 0, "events": []},
            {"msg_index": 1, "events": [
                {"type": "coin_received", "attributes": [
                    {"key": "receiver", "value": WALLET},
                    {"key": "amount", "value": format!("3000000{denom}")}
                ]},
                {"type": "fungible_token_packet", "attributes": [
                    {"key": "sender", "value": "osmo1sender"},
                    {"key": "receiver", "value": WALLET},
                    {"key": "denom", "value": "uosmo"},
                    {"key": "amount", "value": "3000000"},
                    {"key": "success", "value": "true"}
                ]}
            ]}
        ]);
        let mut labels = DenomLabels::new();
        labels.insert(denom, "OSMO");
        let events = classify_tx(WALLET, &tx(0, messages, logs), &labels).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::IbcTransferIn);
        let received = events[0].received.as_ref().unwrap();
        assert_eq!(received.currency, "OSMO");
        assert_relative_eq!(received.quantity, 3.0);
        assert_eq!(events[0].counterparty.as_deref(), Some("osmo1sender"));
        assert!(events[0].fee.is_none());
    }

    #[test]
    fn test_ibc_receive_of_returning_native_token() {
        let messages = json!([{"@type": MSG_RECV_PACKET, "signer": "chihuahua1relayer"}]);
        let logs = json!([{"events": [
            {"type": "fungible_token_packet", "attributes": [
                {"key": "receiver", "value": WALLET},
                {"key": "denom", "value": "transfer/channel-7/uhuahua"},
                {"key": "amount", "value": "2000000"},
                {"key": "success", "value": "true"}
            ]}
        ]}]);
        let events = classify(&tx(0, messages, logs));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].received.as_ref().unwrap().currency, "HUAHUA");
    }

    #[test]
    fn test_contract_execute_with_funds() {
        let message = json!({
            "@type": MSG_EXECUTE_CONTRACT,
            "sender": WALLET,
            "contract": CONTRACT,
            "msg": {"swap": {"min_output": "1"}},
            "funds": [{"denom": "uhuahua", "amount": "1000000"}]
        });
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::ContractExecute);
        assert_eq!(events[0].comment, "execute swap");
        assert_eq!(events[0].counterparty.as_deref(), Some(CONTRACT));
        assert!(events[0].sent.is_some());
    }

    #[test]
    fn test_vote() {
        let message = json!({
            "@type": MSG_VOTE_V1,
            "voter": WALLET,
            "proposal_id": "42",
            "option": "VOTE_OPTION_YES"
        });
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events[0].tx_type, TxType::Vote);
        assert_eq!(events[0].comment, "vote VOTE_OPTION_YES on proposal 42");
    }

    #[test]
    fn test_unknown_message_type() {
        let message = json!({"@type": "/cosmos.authz.v1beta1.MsgExec", "grantee": WALLET, "msgs": []});
        let events = classify(&tx(0, json!([message]), json!([])));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tx_type, TxType::Unknown);
        assert!(events[0].comment.contains("MsgExec"));
        assert!(events[0].fee.is_some());
    }

    #[test]
    fn test_missing_messages() {
        let record = RawTransaction::new("ABC", "2023-03-01T10:00:00Z");
        let err = classify_tx(WALLET, &record, &DenomLabels::new()).unwrap_err();
        assert_eq!(err, ClassifyError::MissingField("tx.body.messages".to_string()));
    }

    #[test]
    fn test_message_without_type() {
        let record = tx(0, json!([send(OTHER, WALLET, "1"), {"from_address": WALLET}]), json!([]));
        let err = classify_tx(WALLET, &record, &DenomLabels::new()).unwrap_err();
        assert_eq!(err, ClassifyError::MissingType { index: 1 });
    }

    #[test]
    fn test_bad_coin_amount() {
        let record = tx(0, json!([send(OTHER, WALLET, "lots")]), json!([]));
        let err = classify_tx(WALLET, &record, &DenomLabels::new()).unwrap_err();
        assert!(matches!(err, ClassifyError::Coin(_)));
    }

    #[test]
    fn test_bad_timestamp() {
        let mut record = tx(0, json!([send(OTHER, WALLET, "1")]), json!([]));
        record.timestamp = "yesterday".into();
        let err = classify_tx(WALLET, &record, &DenomLabels::new()).unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_missing_send_field_names_message() {
        let message = json!({"@type": MSG_SEND, "from_address": OTHER, "amount": []});
        let err = classify_tx(WALLET, &tx(0, json!([message]), json!([])), &DenomLabels::new())
            .unwrap_err();
        assert_eq!(err, ClassifyError::MissingField("MsgSend.to_address".to_string()));
    }
}
