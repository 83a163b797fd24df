/// UUID ベースの ID 型を定義する宣言型マクロ
///
/// ID はすべてバックエンドが採番するため、生成メソッドは持たない。
///
/// - Newtype 構造体（`Uuid` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `from_uuid()`: 既存 UUID から作成
/// - `as_uuid()`: 内部 UUID への参照
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        #[serde(transparent)]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// 既存の UUID から ID を作成する
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// 内部の UUID 参照を取得する
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }
    };
}
