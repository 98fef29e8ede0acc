//! A heads-up round between a dealer and a player, with the chain
//! replaced by plain variables: published moduli, encrypted buffers and
//! revealed secrets are just handed across.

use anyhow::Result;
use mental_poker_client::cards::{Card, ACE, CLUBS, DIAMONDS, HEARTS, KING, QUEEN, SPADES};
use mental_poker_client::stage::Stage;
use mental_poker_client::storage::MemoryStore;
use mental_poker_client::table::{EncryptedHand, PublishedKeys, RevealedSecrets};
use mental_poker_client::{PokerClient, Session};
use rand::thread_rng;

fn main() -> Result<()> {
    let mut rng = thread_rng();

    // both participants join and generate their per-stage keys
    let mut dealer = PokerClient::new(MemoryStore::new(), Session::for_account("alice"));
    let mut player = PokerClient::new(MemoryStore::new(), Session::for_account("bob"));
    dealer.generate_stage_keys(&mut rng)?;
    player.generate_stage_keys(&mut rng)?;

    // the player publishes the moduli on-chain
    let published = PublishedKeys {
        hand: modulus(&player, Stage::Preflop),
        flop: modulus(&player, Stage::Flop),
        turn: modulus(&player, Stage::Turn),
        river: modulus(&player, Stage::River),
    };
    assert!(published.is_valid());

    // deal: the dealer encrypts bob's hole cards under his hand modulus
    let hole_cards = vec![Card::new(ACE, SPADES)?, Card::new(KING, HEARTS)?];
    let hand_modulus = retrieve(&published, Stage::Preflop);
    let dealt = EncryptedHand::from_chain_bytes(
        dealer
            .encrypt_card(&dealer.encode_cards(&hole_cards), &hand_modulus)?
            .to_vec(),
    );

    // bob peeks with his own secret, no reveal needed
    let peeked = player.decrypt_card(
        dealt.as_bytes(),
        &hand_modulus,
        &player.reveal_secret_for(Stage::Preflop).unwrap(),
    )?;
    println!("bob's hand: {}", render(&player.decode_cards(&peeked)?));

    // community cards, encrypted per stage toward bob's stage keys
    let board = [
        (Stage::Flop, vec![
            Card::new(QUEEN, HEARTS)?,
            Card::new(7, CLUBS)?,
            Card::new(2, DIAMONDS)?,
        ]),
        (Stage::Turn, vec![Card::new(10, SPADES)?]),
        (Stage::River, vec![Card::new(ACE, DIAMONDS)?]),
    ];

    let mut revealed = RevealedSecrets::default();
    let mut stage = Stage::Preflop;
    for (deal_stage, cards) in &board {
        stage = player.next_stage(stage);
        assert_eq!(stage, *deal_stage);

        let stage_modulus = retrieve(&published, stage);
        let encrypted = dealer.encrypt_card(&dealer.encode_cards(cards), &stage_modulus)?;

        // betting closes, bob submits this stage's secret on-chain
        revealed.submit(stage, player.reveal_secret_for(stage).unwrap().to_vec());
        let secret: [u8; 32] = revealed.retrieve(stage).unwrap().try_into().unwrap();

        // now anyone watching the chain can open the cards
        let opened = dealer.decrypt_card(&encrypted, &stage_modulus, &secret)?;
        println!("{}: {}", stage, render(&dealer.decode_cards(&opened)?));
    }

    // showdown: the cycle wraps to the hand slot and bob reveals it
    stage = player.next_stage(stage);
    assert_eq!(stage, Stage::Preflop);
    revealed.submit(stage, player.reveal_secret_for(stage).unwrap().to_vec());

    let secret: [u8; 32] = revealed.retrieve(stage).unwrap().try_into().unwrap();
    let shown = dealer.decrypt_card(dealt.as_bytes(), &hand_modulus, &secret)?;
    println!("showdown, bob shows: {}", render(&dealer.decode_cards(&shown)?));

    Ok(())
}

fn modulus(client: &PokerClient<MemoryStore>, stage: Stage) -> Vec<u8> {
    client.public_modulus(stage).unwrap().to_vec()
}

fn retrieve(published: &PublishedKeys, stage: Stage) -> [u8; 32] {
    published.retrieve(stage).try_into().unwrap()
}

fn render(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" & ")
}
