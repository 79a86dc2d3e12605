use crate::{
    block::{Block, BlockEncoding},
    serialization::PktSerialize,
};

use super::{genesis::GENESIS_PREVIOUS_BLOCK_HASH, Network};

/// Expected genesis hashes, in display order.
fn expected_genesis_hash(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
        Network::Testnet => "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943",
        Network::Regtest => "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206",
        Network::Simnet => "683e86bd5c6d110d91b94b97137ba6bfe02dbbdb8e3dff722a669b5d69d77af6",
        Network::PktTestnet => "0bdc1712a46194e552cf417ab0439c2d4f456c35cf63a0a406964c6f93432d85",
    }
}

#[test]
fn genesis_hashes_match_their_constants() {
    for network in Network::iter() {
        let genesis = network.genesis_block();

        assert_eq!(
            genesis.hash.to_string(),
            expected_genesis_hash(network),
            "genesis hash for {network}",
        );
        assert_eq!(network.genesis_hash(), genesis.hash);
    }
}

#[test]
fn genesis_headers_commit_to_their_transactions() {
    for network in Network::iter() {
        let genesis = network.genesis_block();

        let recomputed = genesis.block.transactions.iter().collect();
        assert_eq!(
            genesis.block.header.merkle_root, recomputed,
            "merkle commitment for {network}",
        );
        assert_eq!(genesis.merkle_root, recomputed);
    }
}

#[test]
fn genesis_blocks_have_no_predecessor() {
    for network in Network::iter() {
        let genesis = network.genesis_block();

        assert_eq!(
            genesis.block.header.previous_block_hash,
            GENESIS_PREVIOUS_BLOCK_HASH,
        );
        assert!(genesis.block.coinbase_transaction().is_some());
        assert_eq!(genesis.block.transactions.len(), 1);
    }
}

#[test]
fn bitcoin_style_networks_share_a_merkle_root() {
    let shared = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

    for network in [
        Network::Mainnet,
        Network::Testnet,
        Network::Regtest,
        Network::Simnet,
    ] {
        assert_eq!(network.genesis_block().merkle_root.to_string(), shared);
    }

    assert_eq!(
        Network::PktTestnet.genesis_block().merkle_root.to_string(),
        "fb91c86ad3d3ec947730ef55c5ab0665ab9d449d912a22ec7e46133ba25b34df",
    );
}

#[test]
fn mainnet_coinbase_embeds_the_headline() {
    let genesis = Network::Mainnet.genesis_block();
    let coinbase = genesis
        .block
        .coinbase_transaction()
        .expect("genesis has a coinbase");

    let script = coinbase.inputs[0].unlock_script.as_raw_bytes();
    let headline: &[u8] =
        b"The Times 03/Jan/2009 Chancellor on brink of second bailout for banks";
    assert!(script.windows(headline.len()).any(|window| window == headline));
}

#[test]
fn pkt_testnet_genesis_reencodes_to_the_captured_bytes() {
    let capture = hex::decode(
        include_str!("genesis/block-pkttest-0-000-000.txt").trim(),
    )
    .expect("valid hex");
    // strip the magic and length framing
    let payload = &capture[8..];

    let genesis = Network::PktTestnet.genesis_block();
    let reencoded = genesis
        .block
        .pkt_serialize_to_vec()
        .expect("serialization into a vec never fails");

    assert_eq!(reencoded, payload);

    let reparsed = Block::pkt_deserialize_with(payload, BlockEncoding::PacketCrypt)
        .expect("captured genesis deserializes");
    assert_eq!(&reparsed, genesis.block.as_ref());
}

#[test]
fn pkt_testnet_genesis_header_fields() {
    let genesis = Network::PktTestnet.genesis_block();
    let header = &genesis.block.header;

    assert_eq!(header.version, 0);
    assert_eq!(header.time.timestamp(), 0);
    assert_eq!(u32::from(header.difficulty_threshold), 0x1f0f_ffff);
    assert_eq!(header.nonce, 0);

    let proof = genesis.block.proof.as_ref().expect("extended encoding");
    assert!(!proof.entities.is_empty());
    assert_eq!(proof.entities[0].kind, 1);
}
