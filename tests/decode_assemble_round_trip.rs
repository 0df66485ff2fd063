//! `decode(assemble(line))` round-trips to the instruction record the assembler's own field-wise
//! construction intended, for every mnemonic family the grammar covers.

use corevm::assembler::assemble_line;
use corevm::decoder::decode_word;
use corevm::instruction::{BinaryCfg, LoadCfg, Op, StoreCfg, ValueType};

fn decode(line: &str) -> corevm::instruction::Instruction {
    decode_word(assemble_line(line).unwrap())
}

#[test]
fn binary_rr_round_trips() {
    let i = decode("add r3 r1 r2");
    assert_eq!(i.op, Op::Add);
    assert_eq!(i.binary_cfg(), BinaryCfg::Rr);
    assert_eq!((i.rd, i.ra, i.rb), (3, 1, 2));
}

#[test]
fn binary_ri_round_trips() {
    let i = decode("sub r3 r1 122");
    assert_eq!(i.op, Op::Sub);
    assert_eq!(i.binary_cfg(), BinaryCfg::Ri);
    assert_eq!((i.rd, i.ra, i.immb), (3, 1, 122));
}

#[test]
fn binary_ir_round_trips() {
    let i = decode("mod r3 122 r2");
    assert_eq!(i.op, Op::Mod);
    assert_eq!(i.binary_cfg(), BinaryCfg::Ir);
    assert_eq!((i.rd, i.imma, i.rb), (3, 122, 2));
}

#[test]
fn binary_ii_round_trips() {
    let i = decode("eq r3 123 124");
    assert_eq!(i.op, Op::Eq);
    assert_eq!(i.binary_cfg(), BinaryCfg::Ii);
    assert_eq!((i.rd, i.imma, i.immb), (3, 123, 124));
}

#[test]
fn not_round_trips() {
    let i = decode("not r3 r1");
    assert_eq!(i.op, Op::Not);
    assert_eq!((i.rd, i.ra), (3, 1));
}

#[test]
fn jmp_round_trips() {
    let i = decode("jmp r3 234");
    assert_eq!(i.op, Op::Jmp);
    assert_eq!((i.rd, i.addr), (3, 234));
}

#[test]
fn mov_register_and_immediate_forms_round_trip() {
    let reg = decode("mov r3 r1");
    assert_eq!(reg.op, Op::Load);
    assert_eq!(reg.load_cfg(), LoadCfg::Reg);
    assert_eq!((reg.rd, reg.ra), (3, 1));

    let imm = decode("mov r3 234");
    assert_eq!(imm.op, Op::Load);
    assert_eq!(imm.load_cfg(), LoadCfg::Imm);
    assert_eq!((imm.rd, imm.imma), (3, 234));
}

#[test]
fn load_and_store_address_forms_round_trip_with_their_type() {
    let load = decode("loadint r3 r1");
    assert_eq!(load.op, Op::Load);
    assert_eq!(load.load_cfg(), LoadCfg::Raa);
    assert_eq!(load.r#type, ValueType::Int);
    assert_eq!((load.rd, load.ra), (3, 1));

    let store = decode("storestate r3 234");
    assert_eq!(store.op, Op::Store);
    assert_eq!(store.store_cfg(), StoreCfg::Adr);
    assert_eq!(store.r#type, ValueType::State);
    assert_eq!((store.rd, store.addr), (3, 234));
}

#[test]
fn nop_and_endga_round_trip_with_no_operands() {
    assert_eq!(decode("nop").op, Op::Nop);
    assert_eq!(decode("endga").op, Op::Endga);
}

#[test]
fn concrete_encodings_from_the_spec_table_match_exactly() {
    let cases: &[(&str, u32)] = &[
        ("add r3 r1 r2", 0x10c0_0802),
        ("sub r3 r1 122", 0x24c0_087a),
        ("mod r3 122 r2", 0x58c3_d002),
        ("eq r3 123 124", 0xacc3_d87c),
        ("not r3 r1", 0xb300_0001),
        ("jmp r3 234", 0xc300_00ea),
        ("mov r3 r1", 0xe030_0001),
        ("mov r3 234", 0xe430_00ea),
        ("loadint r3 r1", 0xee30_0001),
        ("storestate r3 234", 0xd330_00ea),
        ("nop", 0x0000_0000),
        ("endga", 0xf000_0000),
    ];
    for (line, expected) in cases {
        assert_eq!(assemble_line(line).unwrap(), *expected, "assembling {line:?}");
    }
}
