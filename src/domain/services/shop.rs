//! Buying items at the campus shop

use crate::domain::entities::{Item, PlayerState};

use super::{ActionOutcome, RejectedAction};

pub fn purchase_item(player: &PlayerState, item: &Item) -> ActionOutcome {
    if !item.is_for_sale() {
        return ActionOutcome::rejected(player, RejectedAction::NotForSale);
    }
    if player.money < item.price {
        return ActionOutcome::rejected(
            player,
            RejectedAction::InsufficientMoney {
                price: item.price,
                money: player.money,
            },
        );
    }

    let mut next = player.clone();
    next.money -= item.price;
    next.grant_item(item.id.clone());
    ActionOutcome::accepted(next, format!("{}을(를) 구입했습니다.", item.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ItemId;

    fn flower() -> Item {
        Item::new(ItemId::new("flower").unwrap(), "꽃다발", 300)
    }

    #[test]
    fn test_purchase_deducts_and_grants() {
        let player = PlayerState::new_game(std::iter::empty());
        let outcome = purchase_item(&player, &flower());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.player.money, player.money - 300);
        assert!(outcome.player.has_item(&flower().id));
    }

    #[test]
    fn test_insufficient_money_rejected() {
        let mut player = PlayerState::new_game(std::iter::empty());
        player.money = 299;
        let outcome = purchase_item(&player, &flower());
        assert_eq!(outcome.player, player);
        assert!(matches!(
            outcome.rejection,
            Some(RejectedAction::InsufficientMoney { price: 300, money: 299 })
        ));
    }

    #[test]
    fn test_gift_only_item_not_for_sale() {
        let player = PlayerState::new_game(std::iter::empty());
        let letter = Item::new(ItemId::new("love_letter").unwrap(), "러브레터", 0);
        let outcome = purchase_item(&player, &letter);
        assert_eq!(outcome.rejection, Some(RejectedAction::NotForSale));
    }
}
