//! ニックネームの自動割り当て
//!
//! 固定の単語リストからランダムに選び、同じセッション内で衝突した場合は
//! `"<base> 1"`, `"<base> 2"`, ... と連番を付けます。連番は 100 回で打ち切り、
//! それでも衝突する場合はタイムスタンプ由来の接尾辞で必ず一意にします。

use std::collections::HashSet;

use rand::seq::SliceRandom;

use super::value_object::{Nickname, Timestamp};

/// ニックネームの候補
pub const NICKNAMES: [&str; 30] = [
    "Clever Penguin",
    "Swift Fox",
    "Bold Badger",
    "Wise Owl",
    "Curious Cat",
    "Brave Bear",
    "Smart Squirrel",
    "Quick Rabbit",
    "Calm Koala",
    "Eager Eagle",
    "Gentle Giraffe",
    "Happy Hippo",
    "Jolly Jaguar",
    "Kind Kangaroo",
    "Lucky Llama",
    "Mighty Moose",
    "Noble Narwhal",
    "Optimistic Otter",
    "Playful Panda",
    "Quiet Quail",
    "Radiant Raccoon",
    "Serene Swan",
    "Tranquil Tiger",
    "Unique Unicorn",
    "Vibrant Vulture",
    "Witty Wolf",
    "Xenial Xerus",
    "Yielding Yak",
    "Zealous Zebra",
    "Amazing Antelope",
];

/// 連番を試す回数の上限（素の候補を含む）
pub const MAX_SUFFIX_ATTEMPTS: usize = 100;

type Picker = Box<dyn Fn(&[&'static str]) -> &'static str + Send + Sync>;

/// ニックネーム生成器
pub struct NicknameGenerator {
    pick: Picker,
}

impl NicknameGenerator {
    /// ランダムに候補を選ぶ生成器
    pub fn new() -> Self {
        Self::with_picker(|candidates| {
            candidates
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or("Anonymous Animal")
        })
    }

    /// 候補の選び方を差し替えた生成器（テスト用）
    pub fn with_picker<F>(pick: F) -> Self
    where
        F: Fn(&[&'static str]) -> &'static str + Send + Sync + 'static,
    {
        Self {
            pick: Box::new(pick),
        }
    }

    /// `existing` と衝突しないニックネームを生成
    pub fn generate(&self, existing: &HashSet<&str>, now: Timestamp) -> Nickname {
        let base = (self.pick)(&NICKNAMES);

        let numbered = std::iter::once(base.to_string())
            .chain((1..MAX_SUFFIX_ATTEMPTS).map(|n| format!("{base} {n}")))
            .find(|candidate| !existing.contains(candidate.as_str()));

        let name = numbered.unwrap_or_else(|| fallback_name(base, existing, now));

        // 候補はすべて空でない単語から組み立てられる
        Nickname::new_unchecked(name)
    }
}

impl Default for NicknameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 連番が尽きた場合の一意な名前（`"<base> <millis>"`, 衝突時は `"-<n>"` を追加）
fn fallback_name(base: &str, existing: &HashSet<&str>, now: Timestamp) -> String {
    let stamped = format!("{base} {}", now.value());
    if !existing.contains(stamped.as_str()) {
        return stamped;
    }
    (1..)
        .map(|n| format!("{stamped}-{n}"))
        .find(|candidate| !existing.contains(candidate.as_str()))
        .unwrap_or(stamped)
}
