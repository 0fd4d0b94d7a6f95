//! Value Object 定義
//!
//! 不変で、値そのもので等価性が決まるドメインの型をまとめています。
//! 生成時にバリデーションを行い、不正な値はドメイン層に入れません。

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValueObjectError;

/// ParticipantId の最大長
const PARTICIPANT_ID_MAX_LEN: usize = 64;

/// 参加者 ID
///
/// クライアントが指定するか、サーバーが `user_<uuid>` 形式で生成します。
/// 再接続をまたいで同じ値が使われます。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantId(String);

impl ParticipantId {
    /// 新しい ParticipantId を作成（前後の空白は取り除く）
    ///
    /// # Errors
    ///
    /// 空文字列、64 文字超過、`[A-Za-z0-9_-]` 以外の文字を含む場合
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValueObjectError::ParticipantIdEmpty);
        }
        if trimmed.chars().count() > PARTICIPANT_ID_MAX_LEN {
            return Err(ValueObjectError::ParticipantIdTooLong(PARTICIPANT_ID_MAX_LEN));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValueObjectError::ParticipantIdInvalidChars(
                trimmed.to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// サーバー側で一意な ParticipantId を生成
    pub fn generate() -> Self {
        Self(format!("user_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantId> for String {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 表示用ニックネーム（セッション内で一意）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValueObjectError::NicknameEmpty);
        }
        Ok(Self(value))
    }

    /// 空でないことが呼び出し側で保証されている値から作成
    pub(super) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Nickname {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 投票カード（固定デッキ）
///
/// デッキは `{0,1,2,3,5,8,13,21,34,55,89,"?"}` で閉じており、それ以外の値は存在しません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Vote {
    Zero,
    One,
    Two,
    Three,
    Five,
    Eight,
    Thirteen,
    TwentyOne,
    ThirtyFour,
    FiftyFive,
    EightyNine,
    /// 「わからない」カード。表示順では常に最後
    Unknown,
}

impl Vote {
    /// 表示順のデッキ（数値昇順、`?` は最後）
    pub const DECK: [Vote; 12] = [
        Vote::Zero,
        Vote::One,
        Vote::Two,
        Vote::Three,
        Vote::Five,
        Vote::Eight,
        Vote::Thirteen,
        Vote::TwentyOne,
        Vote::ThirtyFour,
        Vote::FiftyFive,
        Vote::EightyNine,
        Vote::Unknown,
    ];

    /// カードの数値（`?` は None）
    pub fn points(self) -> Option<u8> {
        match self {
            Vote::Zero => Some(0),
            Vote::One => Some(1),
            Vote::Two => Some(2),
            Vote::Three => Some(3),
            Vote::Five => Some(5),
            Vote::Eight => Some(8),
            Vote::Thirteen => Some(13),
            Vote::TwentyOne => Some(21),
            Vote::ThirtyFour => Some(34),
            Vote::FiftyFive => Some(55),
            Vote::EightyNine => Some(89),
            Vote::Unknown => None,
        }
    }

    /// 数値からカードを取得
    pub fn from_points(points: i64) -> Result<Self, ValueObjectError> {
        Self::DECK
            .into_iter()
            .find(|vote| vote.points().map(i64::from) == Some(points))
            .ok_or_else(|| ValueObjectError::VoteOutOfDeck(points.to_string()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vote::Zero => "0",
            Vote::One => "1",
            Vote::Two => "2",
            Vote::Three => "3",
            Vote::Five => "5",
            Vote::Eight => "8",
            Vote::Thirteen => "13",
            Vote::TwentyOne => "21",
            Vote::ThirtyFour => "34",
            Vote::FiftyFive => "55",
            Vote::EightyNine => "89",
            Vote::Unknown => "?",
        }
    }
}

impl FromStr for Vote {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::DECK
            .into_iter()
            .find(|vote| vote.as_str() == s)
            .ok_or_else(|| ValueObjectError::VoteOutOfDeck(s.to_string()))
    }
}

impl TryFrom<String> for Vote {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Vote> for String {
    fn from(vote: Vote) -> Self {
        vote.as_str().to_string()
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// 初期状態。投票開始待ち
    #[default]
    Waiting,
    /// 投票受付中
    Voting,
    /// 投票終了。結果公開中
    Ended,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Waiting => "waiting",
            SessionStatus::Voting => "voting",
            SessionStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// セッション ID（現在のセッションは常に 1）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub const FIRST: SessionId = SessionId(1);
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// タイムスタンプ（Unix エポックからのミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// `window_millis` だけ過去のタイムスタンプ
    pub fn minus_millis(self, window_millis: i64) -> Self {
        Self(self.0.saturating_sub(window_millis))
    }
}

/// ホスト認証トークン
///
/// 推測不能な値で、プロセスのメモリ上にのみ保持されます。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostToken(String);

impl HostToken {
    /// 新しいトークンを発行
    pub fn generate() -> Self {
        Self(format!("host_{}", Uuid::new_v4().simple()))
    }

    /// リクエストヘッダなど外部から受け取った値をトークンとして扱う
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::HostTokenEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_trims_and_accepts_valid_value() {
        // テスト項目: 前後の空白を除いた有効な ID が受け入れられる
        // given (前提条件):
        let raw = "  user_1700000000_abc-def  ";

        // when (操作):
        let result = ParticipantId::new(raw);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "user_1700000000_abc-def");
    }

    #[test]
    fn test_participant_id_rejects_invalid_values() {
        // テスト項目: 空文字・長すぎる値・不正な文字は拒否される
        // given (前提条件):
        let too_long = "a".repeat(PARTICIPANT_ID_MAX_LEN + 1);

        // when (操作) / then (期待する結果):
        assert_eq!(
            ParticipantId::new("   "),
            Err(ValueObjectError::ParticipantIdEmpty)
        );
        assert_eq!(
            ParticipantId::new(too_long),
            Err(ValueObjectError::ParticipantIdTooLong(PARTICIPANT_ID_MAX_LEN))
        );
        assert!(matches!(
            ParticipantId::new("<script>"),
            Err(ValueObjectError::ParticipantIdInvalidChars(_))
        ));
    }

    #[test]
    fn test_generated_participant_ids_are_valid_and_distinct() {
        // テスト項目: 生成された ID はバリデーションを通過し、毎回異なる
        // when (操作):
        let a = ParticipantId::generate();
        let b = ParticipantId::generate();

        // then (期待する結果):
        assert_ne!(a, b);
        assert!(ParticipantId::new(a.as_str()).is_ok());
        assert!(a.as_str().starts_with("user_"));
    }

    #[test]
    fn test_vote_parses_every_deck_token() {
        // テスト項目: デッキの全トークンが文字列から復元できる
        for vote in Vote::DECK {
            assert_eq!(vote.as_str().parse::<Vote>(), Ok(vote));
        }
    }

    #[test]
    fn test_vote_rejects_value_outside_deck() {
        // テスト項目: デッキに無い値（7 など）は拒否される
        // when (操作):
        let from_str = "7".parse::<Vote>();
        let from_points = Vote::from_points(7);
        let from_empty = "".parse::<Vote>();

        // then (期待する結果):
        assert_eq!(from_str, Err(ValueObjectError::VoteOutOfDeck("7".to_string())));
        assert_eq!(
            from_points,
            Err(ValueObjectError::VoteOutOfDeck("7".to_string()))
        );
        assert!(from_empty.is_err());
    }

    #[test]
    fn test_vote_ordering_puts_unknown_last() {
        // テスト項目: 数値カードは昇順、`?` は最後に並ぶ
        // given (前提条件):
        let mut votes = vec![Vote::Unknown, Vote::EightyNine, Vote::Zero, Vote::Eight];

        // when (操作):
        votes.sort();

        // then (期待する結果):
        assert_eq!(
            votes,
            vec![Vote::Zero, Vote::Eight, Vote::EightyNine, Vote::Unknown]
        );
    }

    #[test]
    fn test_session_status_serializes_lowercase() {
        // テスト項目: SessionStatus は小文字の文字列としてシリアライズされる
        // when (操作):
        let json = serde_json::to_string(&SessionStatus::Voting).unwrap();

        // then (期待する結果):
        assert_eq!(json, "\"voting\"");
        assert_eq!(SessionStatus::default(), SessionStatus::Waiting);
    }
}
