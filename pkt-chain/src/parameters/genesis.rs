//! Genesis consensus parameters for each network.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;

use crate::{
    amount::{Amount, COIN},
    block::{self, merkle, Block, BlockEncoding, Header},
    parameters::network::{magics, Network},
    transaction::{LockTime, Transaction},
    transparent,
    work::difficulty::CompactDifficulty,
};

/// The previous block hash for the genesis block.
///
/// All known networks use the all-zeroes hash, since the genesis block has
/// no predecessor.
pub const GENESIS_PREVIOUS_BLOCK_HASH: block::Hash = block::Hash([0; 32]);

/// A network's genesis block together with its derived identity hash and
/// transaction merkle root.
///
/// Instances are only constructed through [`Network::genesis_block`], which
/// recomputes both derived values from the block data and checks them
/// against the expected constants, so a [`GenesisBlock`]'s fields are
/// always mutually consistent.
pub struct GenesisBlock {
    /// The network this genesis block starts.
    pub network: Network,
    /// The genesis block itself.
    pub block: Arc<Block>,
    /// The block's identity hash, the SHA-256d digest of its serialized
    /// header.
    pub hash: block::Hash,
    /// The merkle root over the block's transaction hashes. Also available
    /// through the header, kept here for direct lookup.
    pub merkle_root: merkle::Root,
}

/// The coinbase transaction embedded in the original Bitcoin genesis block.
///
/// The mainnet, testnet, regtest, and simnet genesis blocks all carry this
/// exact transaction, so they share a merkle root and differ only in their
/// headers.
fn genesis_coinbase_transaction() -> Transaction {
    // The script opcodes are carried verbatim, starting with the difficulty
    // and the newspaper headline that dates the chain's launch.
    let unlock_script = hex::decode(
        "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73",
    )
    .expect("unlock script constant is valid hex");
    let lock_script = hex::decode(
        "4104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac",
    )
    .expect("lock script constant is valid hex");

    Transaction {
        version: 1,
        inputs: vec![transparent::Input {
            outpoint: transparent::OutPoint::null(),
            unlock_script: transparent::Script::new(&unlock_script),
            sequence: u32::MAX,
        }],
        outputs: vec![transparent::Output {
            value: Amount::from(50 * COIN),
            lock_script: transparent::Script::new(&lock_script),
        }],
        lock_time: LockTime::unlocked(),
    }
}

/// Assemble a Bitcoin-style genesis block around the shared coinbase
/// transaction.
fn bitcoin_style_genesis(version: i32, time: i64, bits: u32, nonce: u32) -> Block {
    let transactions = vec![Arc::new(genesis_coinbase_transaction())];
    let merkle_root = transactions.iter().collect();

    Block {
        header: Header {
            version,
            previous_block_hash: GENESIS_PREVIOUS_BLOCK_HASH,
            merkle_root,
            time: Utc
                .timestamp_opt(time, 0)
                .single()
                .expect("genesis timestamp constants are valid"),
            difficulty_threshold: CompactDifficulty::from(bits),
            nonce,
        },
        proof: None,
        transactions,
    }
}

/// The PacketCrypt testnet genesis block, as captured from the wire.
///
/// The capture keeps its message framing: a 4-byte network magic and a
/// 4-byte little-endian payload length, followed by the block in the
/// extended encoding.
const PKT_TESTNET_GENESIS_HEX: &str =
    include_str!("genesis/block-pkttest-0-000-000.txt");

/// Decode the framed PacketCrypt testnet genesis capture.
fn pkt_testnet_genesis() -> Block {
    let framed = hex::decode(PKT_TESTNET_GENESIS_HEX.trim())
        .expect("genesis capture constant is valid hex");

    assert_eq!(
        framed[0..4],
        magics::PKT_TESTNET.0,
        "genesis capture must carry the network magic",
    );
    let payload_length = u32::from_le_bytes(
        framed[4..8]
            .try_into()
            .expect("slice of length 4 converts to [u8; 4]"),
    );
    let payload = &framed[8..];
    assert_eq!(
        payload_length as usize,
        payload.len(),
        "genesis capture framing must describe its payload",
    );

    Block::pkt_deserialize_with(payload, BlockEncoding::PacketCrypt)
        .expect("genesis capture constant deserializes")
}

/// Bundle `block` with its derived hash and merkle root, after checking
/// both against the expected constants.
///
/// # Panics
///
/// If the recomputed hash or merkle root does not match its constant, or
/// the merkle root does not match the header commitment. Since the inputs
/// are compiled-in constants, a mismatch is a bug, not a runtime condition.
fn verified(
    network: Network,
    block: Block,
    expected_hash: &str,
    expected_root: &str,
) -> GenesisBlock {
    let expected_hash: block::Hash = expected_hash
        .parse()
        .expect("expected hash constant is valid hex");
    let expected_root: merkle::Root = expected_root
        .parse()
        .expect("expected merkle root constant is valid hex");

    let hash = block.hash();
    assert_eq!(hash, expected_hash, "genesis hash mismatch for {network}");

    let merkle_root: merkle::Root = block.transactions.iter().collect();
    assert_eq!(
        merkle_root, block.header.merkle_root,
        "genesis header must commit to its transactions for {network}",
    );
    assert_eq!(
        merkle_root, expected_root,
        "genesis merkle root mismatch for {network}",
    );

    tracing::debug!(%network, %hash, "verified genesis block");

    GenesisBlock {
        network,
        block: Arc::new(block),
        hash,
        merkle_root,
    }
}

lazy_static! {
    static ref MAINNET_GENESIS: GenesisBlock = verified(
        Network::Mainnet,
        bitcoin_style_genesis(1, 1_231_006_505, 0x1d00_ffff, 0x7c2b_ac1d),
        "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
    );
    static ref TESTNET_GENESIS: GenesisBlock = verified(
        Network::Testnet,
        bitcoin_style_genesis(1, 1_296_688_602, 0x1d00_ffff, 0x18ae_a41a),
        "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943",
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
    );
    static ref REGTEST_GENESIS: GenesisBlock = verified(
        Network::Regtest,
        bitcoin_style_genesis(1, 1_296_688_602, 0x207f_ffff, 2),
        "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206",
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
    );
    static ref SIMNET_GENESIS: GenesisBlock = verified(
        Network::Simnet,
        bitcoin_style_genesis(1, 1_401_292_357, 0x207f_ffff, 2),
        "683e86bd5c6d110d91b94b97137ba6bfe02dbbdb8e3dff722a669b5d69d77af6",
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
    );
    static ref PKT_TESTNET_GENESIS: GenesisBlock = verified(
        Network::PktTestnet,
        pkt_testnet_genesis(),
        "0bdc1712a46194e552cf417ab0439c2d4f456c35cf63a0a406964c6f93432d85",
        "fb91c86ad3d3ec947730ef55c5ab0665ab9d449d912a22ec7e46133ba25b34df",
    );
}

impl Network {
    /// Returns this network's genesis block, with its derived hash and
    /// merkle root.
    ///
    /// The block is decoded and verified on first use, then cached for the
    /// life of the process.
    pub fn genesis_block(&self) -> &'static GenesisBlock {
        match self {
            Network::Mainnet => &MAINNET_GENESIS,
            Network::Testnet => &TESTNET_GENESIS,
            Network::Regtest => &REGTEST_GENESIS,
            Network::Simnet => &SIMNET_GENESIS,
            Network::PktTestnet => &PKT_TESTNET_GENESIS,
        }
    }

    /// Returns the hash for the genesis block of this network.
    pub fn genesis_hash(&self) -> block::Hash {
        self.genesis_block().hash
    }
}
