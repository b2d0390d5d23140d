//! Banked heap allocator tests.

use proptest::prelude::*;
use riskxvii_core::common::constants::{BANK_SIZE, HEAP_BASE, HEAP_END, NUM_BANKS};
use riskxvii_core::soc::memory::BankHeap;

fn bank_addr(index: u32) -> u32 {
    HEAP_BASE + index * BANK_SIZE
}

#[test]
fn single_bank_allocations_ascend_until_exhausted() {
    let mut heap = BankHeap::new();
    for i in 0..NUM_BANKS as u32 {
        assert_eq!(heap.allocate(1), Some(bank_addr(i)));
    }
    let before = heap.clone();
    assert_eq!(heap.allocate(1), None);
    assert_eq!(heap, before);
}

#[test]
fn whole_heap_fits_one_allocation() {
    let mut heap = BankHeap::new();
    assert_eq!(heap.allocate(BANK_SIZE * NUM_BANKS as u32), Some(HEAP_BASE));
    assert_eq!(heap.allocated_banks(), NUM_BANKS);
    assert_eq!(heap.free(HEAP_END - 1), 1);
    assert_eq!(heap.free(HEAP_BASE), NUM_BANKS - 1);
}

#[test]
fn oversized_request_fails_without_mutation() {
    let mut heap = BankHeap::new();
    assert_eq!(heap.allocate(BANK_SIZE * NUM_BANKS as u32 + 1), None);
    assert_eq!(heap, BankHeap::new());
}

#[test]
fn zero_sized_request_takes_one_bank() {
    let mut heap = BankHeap::new();
    assert_eq!(heap.allocate(0), Some(HEAP_BASE));
    assert_eq!(heap.allocated_banks(), 1);
}

#[test]
fn freed_bank_is_reused_first() {
    let mut heap = BankHeap::new();
    let a = heap.allocate(10).unwrap();
    let b = heap.allocate(10).unwrap();
    assert_eq!(heap.free(a), 1);
    assert_eq!(heap.allocate(10), Some(a));
    assert_eq!(heap.allocate(10), Some(b + BANK_SIZE));
}

#[test]
fn multi_bank_allocation_shares_one_tag() {
    let mut heap = BankHeap::new();
    let addr = heap.allocate(BANK_SIZE * 3).unwrap();
    let tags: Vec<u32> = heap.banks()[..3].iter().map(|b| b.tag()).collect();
    assert!(tags.iter().all(|&t| t == tags[0] && t != 0));
    assert!(!heap.banks()[3].is_allocated());
    assert_eq!(heap.free(addr), 3);
    assert_eq!(heap.allocated_banks(), 0);
}

#[test]
fn broken_run_resumes_after_allocated_bank() {
    let mut heap = BankHeap::new();
    let a = heap.allocate(1).unwrap();
    let _ = heap.allocate(1).unwrap();
    assert_eq!(heap.free(a), 1);

    // One free bank at the front is too small for two banks.
    assert_eq!(heap.allocate(BANK_SIZE + 1), Some(bank_addr(2)));
    assert_eq!(heap.allocate(1), Some(bank_addr(0)));
}

#[test]
fn adjacent_allocations_are_released_separately() {
    let mut heap = BankHeap::new();
    let a = heap.allocate(BANK_SIZE * 2).unwrap();
    let b = heap.allocate(BANK_SIZE * 2).unwrap();
    assert_eq!(b, a + 2 * BANK_SIZE);
    assert_ne!(heap.banks()[1].tag(), heap.banks()[2].tag());

    assert_eq!(heap.free(a), 2);
    assert_eq!(heap.allocated_banks(), 2);
    assert!(heap.banks()[2].is_allocated());
}

#[test]
fn free_from_inside_allocation_releases_following_banks() {
    let mut heap = BankHeap::new();
    let _ = heap.allocate(BANK_SIZE * 4).unwrap();
    assert_eq!(heap.free(bank_addr(2) + 5), 2);
    assert_eq!(heap.allocated_banks(), 2);
}

#[test]
fn free_of_unowned_or_foreign_address_is_noop() {
    let mut heap = BankHeap::new();
    assert_eq!(heap.free(HEAP_BASE), 0);
    assert_eq!(heap.free(0), 0);
    assert_eq!(heap.free(HEAP_END), 0);

    let a = heap.allocate(1).unwrap();
    assert_eq!(heap.free(a), 1);
    assert_eq!(heap.free(a), 0);
}

#[test]
fn byte_access_ignores_allocation_state() {
    let mut heap = BankHeap::new();
    assert_eq!(heap.write_u8(HEAP_BASE + 70, 0x5A), Some(()));
    assert_eq!(heap.read_u8(HEAP_BASE + 70), Some(0x5A));
    assert_eq!(heap.banks()[1].data()[6], 0x5A);
    assert_eq!(heap.write_u8(HEAP_END, 1), None);
    assert_eq!(heap.read_u8(HEAP_BASE - 1), None);
}

proptest! {
    #[test]
    fn allocations_never_overlap(sizes in proptest::collection::vec(0u32..400, 1..40)) {
        let mut heap = BankHeap::new();
        let mut live: Vec<(u32, usize)> = Vec::new();
        for size in sizes {
            if let Some(addr) = heap.allocate(size) {
                let banks = BankHeap::banks_required(size);
                let end = addr + banks as u32 * BANK_SIZE;
                assert!(end <= HEAP_END);
                for &(other, other_banks) in &live {
                    let other_end = other + other_banks as u32 * BANK_SIZE;
                    assert!(end <= other || addr >= other_end);
                }
                live.push((addr, banks));
            }
        }
        let total: usize = live.iter().map(|&(_, banks)| banks).sum();
        assert_eq!(heap.allocated_banks(), total);
    }

    #[test]
    fn free_restores_capacity(size in 1u32..2000) {
        let mut heap = BankHeap::new();
        let addr = heap.allocate(size).unwrap();
        assert_eq!(heap.free(addr), BankHeap::banks_required(size));
        assert_eq!(heap.allocate(BANK_SIZE * NUM_BANKS as u32), Some(HEAP_BASE));
    }
}
