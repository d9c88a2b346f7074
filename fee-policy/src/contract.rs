use common::ownership::{
    assert_owner, initialize_owner, load_ownership, renounce_ownership, transfer_ownership,
};
use common::{CalculateFeeResponse, OwnershipResponse};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ScheduleResponse};
use crate::state::{FeeSchedule, CONTRACT_NAME, CONTRACT_VERSION, SCHEDULE};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    initialize_owner(deps.storage, owner.clone())?;

    msg.schedule.validate()?;
    SCHEDULE.save(deps.storage, &msg.schedule)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("schedule", msg.schedule.kind()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    match msg {
        ExecuteMsg::SetFee { fee } => execute_set_fee(deps, info, fee),
        ExecuteMsg::SetSchedule { schedule } => execute_set_schedule(deps, info, schedule),
        ExecuteMsg::TransferOwnership { new_owner } => {
            let new_owner = deps.api.addr_validate(&new_owner)?;
            transfer_ownership(deps.storage, &info.sender, new_owner.clone())?;
            Ok(Response::new()
                .add_attribute("action", "transfer_ownership")
                .add_attribute("new_owner", new_owner))
        }
        ExecuteMsg::RenounceOwnership {} => {
            let previous = renounce_ownership(deps.storage, &info.sender)?;
            Ok(Response::new()
                .add_attribute("action", "renounce_ownership")
                .add_attribute("previous_owner", previous))
        }
    }
}

fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    execute_set_schedule(deps, info, FeeSchedule::Flat { fee })
}

fn execute_set_schedule(
    deps: DepsMut,
    info: MessageInfo,
    schedule: FeeSchedule,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    schedule.validate()?;
    SCHEDULE.save(deps.storage, &schedule)?;

    let mut response = Response::new()
        .add_attribute("action", "set_schedule")
        .add_attribute("schedule", schedule.kind());
    if let FeeSchedule::Flat { fee } = schedule {
        response = response.add_attribute("fee", fee);
    }
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Calculate { amount } => to_json_binary(&query_calculate(deps, amount)?),
        QueryMsg::Schedule {} => to_json_binary(&ScheduleResponse {
            schedule: SCHEDULE.load(deps.storage)?,
        }),
        QueryMsg::Ownership {} => {
            to_json_binary(&OwnershipResponse::from(load_ownership(deps.storage)?))
        }
    }
}

fn query_calculate(deps: Deps, amount: Uint128) -> StdResult<CalculateFeeResponse> {
    let schedule = SCHEDULE.load(deps.storage)?;
    Ok(CalculateFeeResponse {
        fee: schedule.calculate(amount),
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
